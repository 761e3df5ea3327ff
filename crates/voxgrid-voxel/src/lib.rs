//! Sparse chunked voxel storage for the voxgrid engine.

pub mod chunk;
pub mod store;

pub use chunk::Chunk;
pub use store::ChunkStore;

use voxgrid_core::{ChunkPos, ChunkSize, VoxelPos, VoxelType};

/// Read access to voxel data by global position.
///
/// Implementations must be total: positions with no backing storage read
/// as [`VoxelType::EMPTY`].
pub trait VoxelStorage {
    /// Edge length of the chunks this storage is partitioned into.
    fn chunk_size(&self) -> ChunkSize;

    /// Get the voxel at a global position.
    fn get_voxel(&self, pos: VoxelPos) -> VoxelType;

    /// Whether a chunk may hold solid voxels.
    ///
    /// Returning false lets readers skip the whole chunk; the default makes
    /// no such promise.
    fn contains_chunk(&self, _pos: ChunkPos) -> bool {
        true
    }
}
