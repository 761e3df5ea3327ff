//! Voxel edits driven by ray picking.

use glam::IVec3;
use serde::{Deserialize, Serialize};
use voxgrid_core::{ChunkPos, ChunkSize, RayHit, VoxelPos, VoxelType};

/// What an edit does to the picked location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditKind {
    /// Put a voxel of this type against the struck face.
    Place(VoxelType),
    /// Clear the struck voxel.
    Remove,
}

impl EditKind {
    /// Voxel type written by this edit.
    #[inline]
    pub const fn voxel(self) -> VoxelType {
        match self {
            Self::Place(voxel) => voxel,
            Self::Remove => VoxelType::EMPTY,
        }
    }
}

/// Result of an applied edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOutcome {
    /// Edited voxel
    pub pos: VoxelPos,
    /// Type held before the edit
    pub previous: VoxelType,
    /// Type written by the edit
    pub voxel: VoxelType,
    /// Chunks whose meshes must be rebuilt; empty if the write was dropped
    pub affected: Vec<ChunkPos>,
}

impl EditOutcome {
    /// Whether the write landed in storage.
    pub fn applied(&self) -> bool {
        !self.affected.is_empty()
    }
}

/// Voxel targeted by an edit at a ray hit.
///
/// Placing steps half a voxel out of the struck face, removing steps half a
/// voxel in, then floors to the containing voxel.
pub fn edit_target(hit: &RayHit, kind: EditKind) -> VoxelPos {
    match kind {
        EditKind::Place(_) => hit.adjacent_voxel(),
        EditKind::Remove => hit.struck_voxel(),
    }
}

/// Chunks whose visible faces can change when the voxel at `pos` changes.
///
/// Covers the voxel's own chunk and the chunks of its six face neighbours,
/// de-duplicated, in the order self, -X, +X, -Y, +Y, -Z, +Z. Neighbours
/// past the edge of the `i32` voxel range are skipped.
pub fn affected_chunks(pos: VoxelPos, size: ChunkSize) -> Vec<ChunkPos> {
    const OFFSETS: [IVec3; 7] = [
        IVec3::ZERO,
        IVec3::NEG_X,
        IVec3::X,
        IVec3::NEG_Y,
        IVec3::Y,
        IVec3::NEG_Z,
        IVec3::Z,
    ];

    let mut chunks = Vec::with_capacity(4);
    for delta in OFFSETS {
        let Some(neighbour) = pos.checked_offset(delta) else {
            continue;
        };
        let chunk = size.chunk_coord(neighbour);
        if !chunks.contains(&chunk) {
            chunks.push(chunk);
        }
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn size() -> ChunkSize {
        ChunkSize::new(32).unwrap()
    }

    #[test]
    fn interior_voxel_affects_one_chunk() {
        assert_eq!(
            affected_chunks(VoxelPos::new(5, 5, 5), size()),
            vec![ChunkPos::new(0, 0, 0)]
        );
    }

    #[test]
    fn border_voxel_affects_neighbour_chunks() {
        assert_eq!(
            affected_chunks(VoxelPos::new(0, 31, 5), size()),
            vec![
                ChunkPos::new(0, 0, 0),
                ChunkPos::new(-1, 0, 0),
                ChunkPos::new(0, 1, 0),
            ]
        );
    }

    #[test]
    fn corner_voxel_affects_four_chunks() {
        let chunks = affected_chunks(VoxelPos::new(-1, -1, -1), size());
        assert_eq!(
            chunks,
            vec![
                ChunkPos::new(-1, -1, -1),
                ChunkPos::new(0, -1, -1),
                ChunkPos::new(-1, 0, -1),
                ChunkPos::new(-1, -1, 0),
            ]
        );
    }

    #[test]
    fn voxel_at_i32_edge_skips_unaddressable_neighbours() {
        let max = size().chunk_coord(VoxelPos::new(i32::MAX, 0, 0));
        assert_eq!(
            affected_chunks(VoxelPos::new(i32::MAX, 0, 0), size()),
            vec![
                max,
                ChunkPos::new(max.x, -1, 0),
                ChunkPos::new(max.x, 0, -1),
            ]
        );

        let min = size().chunk_coord(VoxelPos::new(i32::MIN, i32::MIN, i32::MIN));
        assert_eq!(
            affected_chunks(VoxelPos::new(i32::MIN, i32::MIN, i32::MIN), size()),
            vec![min]
        );
    }

    #[test]
    fn targets_step_out_for_place_and_in_for_remove() {
        let hit = RayHit {
            position: Vec3::new(2.5, 1.0, 3.5),
            normal: IVec3::Y,
            voxel: VoxelType(1),
        };
        assert_eq!(
            edit_target(&hit, EditKind::Place(VoxelType(4))),
            VoxelPos::new(2, 1, 3)
        );
        assert_eq!(edit_target(&hit, EditKind::Remove), VoxelPos::new(2, 0, 3));
    }

    #[test]
    fn edit_kind_voxel() {
        assert_eq!(EditKind::Place(VoxelType(9)).voxel(), VoxelType(9));
        assert_eq!(EditKind::Remove.voxel(), VoxelType::EMPTY);
    }
}
