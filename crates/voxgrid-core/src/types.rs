//! Core voxel types.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Material identifier stored per voxel.
///
/// Type 0 is reserved for empty space (air); every other value names a
/// material and selects a column of the texture atlas.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Pod,
    Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct VoxelType(pub u8);

impl VoxelType {
    /// Empty space
    pub const EMPTY: Self = Self(0);
    /// Largest representable material
    pub const MAX: Self = Self(u8::MAX);

    /// Returns true if this voxel is empty
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this voxel holds a material
    #[inline]
    pub const fn is_solid(self) -> bool {
        self.0 != 0
    }

    /// Atlas column for this material, `None` for empty space.
    #[inline]
    pub const fn atlas_column(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0 as u32 - 1)
        }
    }
}
