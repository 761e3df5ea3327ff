//! Voxel world facade for the voxgrid engine.
//!
//! [`VoxelWorld`] owns a chunk store together with its fixed configuration
//! and exposes voxel access, chunk meshing, ray picking and edits.

pub mod config;
pub mod edit;
pub mod generation;
pub mod world;

pub use config::{WorldConfig, WorldShape};
pub use edit::{affected_chunks, edit_target, EditKind, EditOutcome};
pub use generation::{TerrainConfig, TerrainGenerator};
pub use world::VoxelWorld;

/// World seed for procedural generation.
pub type WorldSeed = u64;
