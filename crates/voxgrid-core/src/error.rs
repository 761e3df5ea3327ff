//! Error types for the engine.

use thiserror::Error;

/// Engine-wide error type.
///
/// Voxel access, meshing and raycasting are total and never fail; only
/// configuration can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration rejected at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
