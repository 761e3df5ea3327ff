//! Sparse map from chunk coordinates to dense chunks.

use hashbrown::HashMap;
use tracing::trace;
use voxgrid_core::{ChunkPos, ChunkSize, VoxelPos, VoxelType};

use crate::chunk::Chunk;
use crate::VoxelStorage;

/// Owns all voxel data of a world, partitioned into lazily created chunks.
///
/// Reads never allocate: a position whose chunk does not exist reads as
/// empty. Writes create the owning chunk on demand unless told otherwise.
#[derive(Clone, Debug, Default)]
pub struct ChunkStore {
    chunk_size: ChunkSize,
    /// All allocated chunks indexed by position.
    chunks: HashMap<ChunkPos, Chunk>,
}

impl ChunkStore {
    /// Create an empty store with the given chunk edge length.
    pub fn new(chunk_size: ChunkSize) -> Self {
        Self {
            chunk_size,
            chunks: HashMap::new(),
        }
    }

    /// Chunk containing the voxel (floor division per axis).
    #[inline]
    pub fn compute_chunk_coord(&self, pos: VoxelPos) -> ChunkPos {
        self.chunk_size.chunk_coord(pos)
    }

    /// Flat index of the voxel within its chunk.
    #[inline]
    pub fn compute_local_offset(&self, pos: VoxelPos) -> usize {
        self.chunk_size.local_offset(pos)
    }

    /// Get the voxel at a global position, empty if its chunk was never created.
    pub fn get_voxel(&self, pos: VoxelPos) -> VoxelType {
        self.chunks
            .get(&self.compute_chunk_coord(pos))
            .map_or(VoxelType::EMPTY, |chunk| {
                chunk.get(self.compute_local_offset(pos))
            })
    }

    /// Set the voxel at a global position, creating its chunk if needed.
    pub fn set_voxel(&mut self, pos: VoxelPos, voxel: VoxelType) {
        self.write_voxel(pos, voxel, true);
    }

    /// Set the voxel only if its chunk already exists.
    ///
    /// Returns false when the write was dropped.
    pub fn set_voxel_if_present(&mut self, pos: VoxelPos, voxel: VoxelType) -> bool {
        self.write_voxel(pos, voxel, false)
    }

    /// Write a voxel, optionally allocating the owning chunk.
    ///
    /// With `create_if_missing` false a write into a missing chunk is
    /// silently dropped. Returns whether the write landed.
    pub fn write_voxel(
        &mut self,
        pos: VoxelPos,
        voxel: VoxelType,
        create_if_missing: bool,
    ) -> bool {
        let chunk_pos = self.compute_chunk_coord(pos);
        let offset = self.compute_local_offset(pos);

        let chunk = if create_if_missing {
            self.ensure_chunk(chunk_pos)
        } else {
            match self.chunks.get_mut(&chunk_pos) {
                Some(chunk) => chunk,
                None => {
                    trace!(?pos, "dropping write outside allocated chunks");
                    return false;
                }
            }
        };
        chunk.set(offset, voxel);
        true
    }

    /// Get the chunk at `pos`, creating an empty one if it does not exist.
    pub fn ensure_chunk(&mut self, pos: ChunkPos) -> &mut Chunk {
        let chunk_size = self.chunk_size;
        self.chunks.entry(pos).or_insert_with(|| {
            trace!(?pos, "allocating chunk");
            Chunk::new(chunk_size)
        })
    }

    /// Edge length of every chunk in this store.
    #[inline]
    pub fn chunk_size(&self) -> ChunkSize {
        self.chunk_size
    }

    /// Get the chunk at the given position.
    pub fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    /// Check if a chunk exists at the given position.
    pub fn contains_chunk(&self, pos: ChunkPos) -> bool {
        self.chunks.contains_key(&pos)
    }

    /// Get the number of allocated chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Check if no chunks are allocated.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Get all allocated chunk positions, sorted.
    pub fn positions(&self) -> Vec<ChunkPos> {
        let mut positions: Vec<_> = self.chunks.keys().copied().collect();
        positions.sort_unstable();
        positions
    }

    /// Drop every chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }
}

impl VoxelStorage for ChunkStore {
    #[inline]
    fn chunk_size(&self) -> ChunkSize {
        self.chunk_size
    }

    #[inline]
    fn get_voxel(&self, pos: VoxelPos) -> VoxelType {
        Self::get_voxel(self, pos)
    }

    #[inline]
    fn contains_chunk(&self, pos: ChunkPos) -> bool {
        Self::contains_chunk(self, pos)
    }
}
