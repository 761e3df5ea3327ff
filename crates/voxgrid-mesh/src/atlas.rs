//! Texture atlas layout used to derive per-vertex UVs.

use serde::{Deserialize, Serialize};
use voxgrid_core::constants::DEFAULT_TILE_SIZE;
use voxgrid_core::{Error, Result, VoxelType};

/// Grid of square tiles in a shared texture.
///
/// Each material owns one atlas column (`type - 1`) and each face picks a
/// row. UVs follow a top-left image origin, so `v` is flipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasLayout {
    /// Tile edge length in pixels
    pub tile_size: u32,
    /// Atlas width in pixels
    pub width: u32,
    /// Atlas height in pixels
    pub height: u32,
}

impl AtlasLayout {
    /// Create a new atlas layout
    pub const fn new(tile_size: u32, width: u32, height: u32) -> Self {
        Self {
            tile_size,
            width,
            height,
        }
    }

    /// Reject zero-sized tiles or textures.
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(Error::InvalidConfig(
                "atlas tile size must be non-zero".into(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "atlas dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Number of whole tile columns in the atlas.
    pub const fn columns(&self) -> u32 {
        self.width / self.tile_size
    }

    /// Atlas-space texture coordinate of one face corner.
    ///
    /// `u = (column + corner_u) * tile / width`,
    /// `v = 1 - (row + 1 - corner_v) * tile / height`.
    pub fn uv(&self, voxel: VoxelType, row: u32, corner_uv: [f32; 2]) -> [f32; 2] {
        let column = voxel.atlas_column().unwrap_or(0) as f32;
        let tile = self.tile_size as f32;
        let u = (column + corner_uv[0]) * tile / self.width as f32;
        let v = 1.0 - (row as f32 + 1.0 - corner_uv[1]) * tile / self.height as f32;
        [u, v]
    }
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE, 256, 64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn uv_formula() {
        let atlas = AtlasLayout::new(16, 256, 64);

        let [u, v] = atlas.uv(VoxelType(3), 2, [1.0, 1.0]);
        assert_abs_diff_eq!(u, 0.1875);
        assert_abs_diff_eq!(v, 0.5);

        let [u, v] = atlas.uv(VoxelType(1), 0, [0.0, 0.0]);
        assert_abs_diff_eq!(u, 0.0);
        assert_abs_diff_eq!(v, 0.75);

        let [u, v] = atlas.uv(VoxelType(1), 0, [1.0, 1.0]);
        assert_abs_diff_eq!(u, 0.0625);
        assert_abs_diff_eq!(v, 1.0);
    }

    #[test]
    fn validate_rejects_zero_sizes() {
        assert!(AtlasLayout::default().validate().is_ok());
        assert!(AtlasLayout::new(0, 256, 64).validate().is_err());
        assert!(AtlasLayout::new(16, 0, 64).validate().is_err());
        assert!(AtlasLayout::new(16, 256, 0).validate().is_err());
        assert_eq!(AtlasLayout::default().columns(), 16);
    }
}
