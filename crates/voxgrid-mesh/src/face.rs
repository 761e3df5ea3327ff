//! Static description of the six faces of a unit voxel.
//!
//! Corner order fixes the triangle winding: with indices
//! [`FACE_INDICES`] both triangles are counter-clockwise when seen from
//! outside the voxel, along the face normal.

use glam::IVec3;

/// Index pattern for the two triangles of a face, relative to its first vertex.
pub const FACE_INDICES: [u32; 6] = [0, 1, 2, 2, 1, 3];

/// One corner of a face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceCorner {
    /// Position on the unit cube, origin at the voxel's lower corner
    pub pos: [f32; 3],
    /// Fraction of the atlas tile (each component 0 or 1)
    pub uv: [f32; 2],
}

/// One side of a voxel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceDescriptor {
    /// Outward unit normal
    pub normal: IVec3,
    /// Corners in emission order
    pub corners: [FaceCorner; 4],
    /// Atlas row holding this side's texture
    pub uv_row: u32,
}

const fn corner(pos: [f32; 3], uv: [f32; 2]) -> FaceCorner {
    FaceCorner { pos, uv }
}

/// Faces in order: -X, +X, -Y, +Y, -Z, +Z.
///
/// Sides use atlas row 0, the bottom row 1 and the top row 2.
pub const FACES: [FaceDescriptor; 6] = [
    FaceDescriptor {
        normal: IVec3::NEG_X,
        corners: [
            corner([0.0, 1.0, 0.0], [0.0, 1.0]),
            corner([0.0, 0.0, 0.0], [0.0, 0.0]),
            corner([0.0, 1.0, 1.0], [1.0, 1.0]),
            corner([0.0, 0.0, 1.0], [1.0, 0.0]),
        ],
        uv_row: 0,
    },
    FaceDescriptor {
        normal: IVec3::X,
        corners: [
            corner([1.0, 1.0, 1.0], [0.0, 1.0]),
            corner([1.0, 0.0, 1.0], [0.0, 0.0]),
            corner([1.0, 1.0, 0.0], [1.0, 1.0]),
            corner([1.0, 0.0, 0.0], [1.0, 0.0]),
        ],
        uv_row: 0,
    },
    FaceDescriptor {
        normal: IVec3::NEG_Y,
        corners: [
            corner([1.0, 0.0, 1.0], [1.0, 0.0]),
            corner([0.0, 0.0, 1.0], [0.0, 0.0]),
            corner([1.0, 0.0, 0.0], [1.0, 1.0]),
            corner([0.0, 0.0, 0.0], [0.0, 1.0]),
        ],
        uv_row: 1,
    },
    FaceDescriptor {
        normal: IVec3::Y,
        corners: [
            corner([0.0, 1.0, 1.0], [1.0, 1.0]),
            corner([1.0, 1.0, 1.0], [0.0, 1.0]),
            corner([0.0, 1.0, 0.0], [1.0, 0.0]),
            corner([1.0, 1.0, 0.0], [0.0, 0.0]),
        ],
        uv_row: 2,
    },
    FaceDescriptor {
        normal: IVec3::NEG_Z,
        corners: [
            corner([1.0, 0.0, 0.0], [0.0, 0.0]),
            corner([0.0, 0.0, 0.0], [1.0, 0.0]),
            corner([1.0, 1.0, 0.0], [0.0, 1.0]),
            corner([0.0, 1.0, 0.0], [1.0, 1.0]),
        ],
        uv_row: 0,
    },
    FaceDescriptor {
        normal: IVec3::Z,
        corners: [
            corner([0.0, 0.0, 1.0], [0.0, 0.0]),
            corner([1.0, 0.0, 1.0], [1.0, 0.0]),
            corner([0.0, 1.0, 1.0], [0.0, 1.0]),
            corner([1.0, 1.0, 1.0], [1.0, 1.0]),
        ],
        uv_row: 0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn corner_pos(face: &FaceDescriptor, i: u32) -> Vec3 {
        Vec3::from_array(face.corners[i as usize].pos)
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        for face in &FACES {
            let normal = face.normal.as_vec3();
            for tri in FACE_INDICES.chunks_exact(3) {
                let a = corner_pos(face, tri[0]);
                let b = corner_pos(face, tri[1]);
                let c = corner_pos(face, tri[2]);
                assert_eq!((b - a).cross(c - a), normal, "face {:?}", face.normal);
            }
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for face in &FACES {
            let normal = face.normal.as_vec3();
            let plane = normal.max(Vec3::ZERO).dot(normal.abs());
            for corner in &face.corners {
                assert_eq!(Vec3::from_array(corner.pos).dot(normal.abs()), plane);
            }
        }
    }

    #[test]
    fn normals_cover_all_six_directions() {
        let normals: Vec<_> = FACES.iter().map(|f| f.normal).collect();
        for dir in [
            IVec3::X,
            IVec3::NEG_X,
            IVec3::Y,
            IVec3::NEG_Y,
            IVec3::Z,
            IVec3::NEG_Z,
        ] {
            assert_eq!(normals.iter().filter(|n| **n == dir).count(), 1);
        }
    }
}
