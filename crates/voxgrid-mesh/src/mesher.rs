//! Face-culled mesh extraction.
//!
//! Every solid voxel emits one quad per side whose neighbour is empty.
//! Neighbours are looked up by global position, so faces on a chunk border
//! are culled against the adjacent chunk, and drawn when that chunk was
//! never created.

use tracing::{debug, instrument};
use voxgrid_core::constants::MAX_CHUNK_SIZE;
use voxgrid_core::{ChunkPos, LocalPos, Ray, RayHit, VoxelPos, VoxelType};

use crate::atlas::AtlasLayout;
use crate::face::{FaceDescriptor, FACES, FACE_INDICES};
use crate::mesh::MeshBuffers;
use crate::raycast::intersect_ray;
use crate::VoxelStorage;

/// Most vertices one chunk can emit: every other voxel solid, each showing
/// six faces of four vertices.
const MAX_CHUNK_VERTICES: u64 = 12 * (MAX_CHUNK_SIZE as u64).pow(3);

const _: () = assert!(MAX_CHUNK_VERTICES <= u32::MAX as u64);

/// Stateless mesher bundling the optional atlas used for UV generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoxelMesher {
    atlas: Option<AtlasLayout>,
}

impl VoxelMesher {
    /// Mesher that emits positions, normals and indices only.
    pub const fn new() -> Self {
        Self { atlas: None }
    }

    /// Mesher that also emits atlas UVs.
    pub const fn with_atlas(atlas: AtlasLayout) -> Self {
        Self { atlas: Some(atlas) }
    }

    /// Atlas used for UV generation, if any.
    pub const fn atlas(&self) -> Option<&AtlasLayout> {
        self.atlas.as_ref()
    }

    /// Extract the mesh of one chunk.
    pub fn extract_chunk<S>(&self, storage: &S, chunk: ChunkPos) -> MeshBuffers
    where
        S: VoxelStorage + ?Sized,
    {
        extract_chunk_mesh(storage, chunk, self.atlas.as_ref())
    }

    /// Find the first solid voxel along a ray segment.
    pub fn intersect_ray<S>(&self, storage: &S, ray: &Ray) -> Option<RayHit>
    where
        S: VoxelStorage + ?Sized,
    {
        intersect_ray(storage, ray)
    }
}

/// Build the face-culled mesh of one chunk.
///
/// Positions are relative to the chunk origin. UVs are generated only when
/// an atlas is supplied. Voxels are visited y-major, then z, then x.
/// Neighbours past the edge of the `i32` voxel range read as empty.
#[instrument(level = "trace", skip_all, fields(chunk = ?chunk))]
pub fn extract_chunk_mesh<S>(
    storage: &S,
    chunk: ChunkPos,
    atlas: Option<&AtlasLayout>,
) -> MeshBuffers
where
    S: VoxelStorage + ?Sized,
{
    let mut mesh = MeshBuffers::new(atlas.is_some());
    if !storage.contains_chunk(chunk) {
        return mesh;
    }

    let size = storage.chunk_size();
    let edge = size.get();
    for y in 0..edge {
        for z in 0..edge {
            for x in 0..edge {
                let local = LocalPos::new(x, y, z);
                let Some(pos) = VoxelPos::from_chunk_local(chunk, local, size) else {
                    continue;
                };
                let voxel = storage.get_voxel(pos);
                if voxel.is_empty() {
                    continue;
                }
                for face in &FACES {
                    let neighbour = pos
                        .checked_offset(face.normal)
                        .map_or(VoxelType::EMPTY, |n| storage.get_voxel(n));
                    if neighbour.is_empty() {
                        push_face(&mut mesh, face, local, voxel, atlas);
                    }
                }
            }
        }
    }

    debug!(
        ?chunk,
        quads = mesh.quad_count(),
        vertices = mesh.vertex_count(),
        "extracted chunk mesh"
    );
    mesh
}

fn push_face(
    mesh: &mut MeshBuffers,
    face: &FaceDescriptor,
    local: LocalPos,
    voxel: VoxelType,
    atlas: Option<&AtlasLayout>,
) {
    // Bounded by MAX_CHUNK_VERTICES, so the conversion never saturates.
    debug_assert!(mesh.vertex_count() as u64 + 4 <= MAX_CHUNK_VERTICES);
    let base = u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX);
    let offset = local.to_vec3();
    let normal = face.normal.as_vec3();

    for corner in &face.corners {
        mesh.positions.extend_from_slice(&[
            corner.pos[0] + offset.x,
            corner.pos[1] + offset.y,
            corner.pos[2] + offset.z,
        ]);
        mesh.normals.extend_from_slice(&normal.to_array());
        if let (Some(uvs), Some(atlas)) = (mesh.uvs.as_mut(), atlas) {
            uvs.extend_from_slice(&atlas.uv(voxel, face.uv_row, corner.uv));
        }
    }
    mesh.indices.extend(FACE_INDICES.iter().map(|index| base + index));
}
