//! Dense chunk of voxel data.

use voxgrid_core::{ChunkSize, LocalPos, VoxelType};

/// A dense cube of `size³` voxels.
///
/// Voxels are laid out as `y * size² + z * size + x`. The array length is
/// fixed at creation and every entry starts out empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    size: ChunkSize,
    voxels: Box<[VoxelType]>,
}

impl Chunk {
    /// Create a new empty chunk.
    pub fn new(size: ChunkSize) -> Self {
        Self {
            size,
            voxels: vec![VoxelType::EMPTY; size.volume()].into_boxed_slice(),
        }
    }

    /// Edge length of this chunk.
    #[inline]
    pub fn size(&self) -> ChunkSize {
        self.size
    }

    /// Number of voxel slots (always `size³`).
    #[inline]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Get the voxel at a flat index. Out-of-range indices read as empty.
    #[inline]
    pub fn get(&self, index: usize) -> VoxelType {
        self.voxels.get(index).copied().unwrap_or_default()
    }

    /// Set the voxel at a flat index. Out-of-range indices are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, voxel: VoxelType) {
        if let Some(slot) = self.voxels.get_mut(index) {
            *slot = voxel;
        }
    }

    /// Get the voxel at a local position.
    #[inline]
    pub fn get_local(&self, pos: LocalPos) -> VoxelType {
        self.get(pos.to_index(self.size))
    }

    /// Set the voxel at a local position.
    #[inline]
    pub fn set_local(&mut self, pos: LocalPos, voxel: VoxelType) {
        self.set(pos.to_index(self.size), voxel);
    }

    /// Count non-empty voxels.
    pub fn solid_count(&self) -> usize {
        self.voxels.iter().filter(|v| v.is_solid()).count()
    }

    /// Check if this chunk is empty (all air).
    pub fn is_empty(&self) -> bool {
        self.voxels.iter().all(|v| v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chunk_is_empty_and_full_size() {
        let chunk = Chunk::new(ChunkSize::new(4).unwrap());
        assert_eq!(chunk.len(), 64);
        assert!(chunk.is_empty());
        assert_eq!(chunk.solid_count(), 0);
    }

    #[test]
    fn set_and_get_local() {
        let mut chunk = Chunk::new(ChunkSize::new(8).unwrap());
        let pos = LocalPos::new(1, 2, 3);
        chunk.set_local(pos, VoxelType(7));

        assert_eq!(chunk.get_local(pos), VoxelType(7));
        assert_eq!(chunk.get(2 * 64 + 3 * 8 + 1), VoxelType(7));
        assert_eq!(chunk.solid_count(), 1);
        assert!(!chunk.is_empty());
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut chunk = Chunk::new(ChunkSize::new(2).unwrap());
        chunk.set(100, VoxelType(1));
        assert_eq!(chunk.get(100), VoxelType::EMPTY);
        assert!(chunk.is_empty());
        assert_eq!(chunk.len(), 8);
    }
}
