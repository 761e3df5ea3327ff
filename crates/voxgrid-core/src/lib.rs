//! Core types for the voxgrid engine.
//!
//! This crate provides the foundational types shared by the store, mesher
//! and world crates:
//! - Voxel type identifiers
//! - Coordinate systems (voxel, chunk, local) with floor-division mapping
//! - Segment rays and ray hit records
//! - Common error types

pub mod coords;
pub mod error;
pub mod math;
pub mod types;

pub use coords::{ChunkPos, ChunkSize, LocalPos, VoxelPos};
pub use error::{Error, Result};
pub use math::{Ray, RayHit};
pub use types::VoxelType;

/// Engine-wide constants
pub mod constants {
    /// Default edge length of a chunk in voxels
    pub const DEFAULT_CHUNK_SIZE: u32 = 32;
    /// Default atlas tile edge length in pixels
    pub const DEFAULT_TILE_SIZE: u32 = 16;
    /// Largest accepted chunk edge length.
    ///
    /// A chunk this size can expose at most `12 * size³` mesh vertices
    /// (checkerboard fill), which stays within `u32` vertex indices.
    pub const MAX_CHUNK_SIZE: u32 = 512;
}
