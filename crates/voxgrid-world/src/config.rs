//! World configuration, fixed for the lifetime of a world.

use serde::{Deserialize, Serialize};
use voxgrid_core::{ChunkSize, Result};
use voxgrid_mesh::AtlasLayout;

/// Extent of the addressable world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldShape {
    /// Chunks are created on first write, anywhere.
    #[default]
    Unbounded,
    /// A single pre-allocated chunk at the origin; writes elsewhere are dropped.
    Bounded,
}

/// World configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Chunk edge length in voxels.
    pub chunk_size: ChunkSize,
    /// Texture atlas; `None` disables UV generation.
    pub atlas: Option<AtlasLayout>,
    /// Unbounded chunked world or bounded single cell.
    pub shape: WorldShape,
}

impl WorldConfig {
    /// Create a config for an unbounded world without UVs.
    pub fn new(chunk_size: u32) -> Result<Self> {
        Ok(Self {
            chunk_size: ChunkSize::new(chunk_size)?,
            ..Self::default()
        })
    }

    /// Set the texture atlas used for UV generation.
    #[must_use]
    pub const fn with_atlas(mut self, atlas: AtlasLayout) -> Self {
        self.atlas = Some(atlas);
        self
    }

    /// Set the world shape.
    #[must_use]
    pub const fn with_shape(mut self, shape: WorldShape) -> Self {
        self.shape = shape;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        ChunkSize::new(self.chunk_size.get())?;
        if let Some(atlas) = &self.atlas {
            atlas.validate()?;
        }
        Ok(())
    }
}
