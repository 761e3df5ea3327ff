//! Coordinate systems for the voxel world.
//!
//! Voxel positions are unbounded signed integers. A voxel belongs to the
//! chunk found by floor division of each axis by the chunk edge length, and
//! sits at the Euclidean remainder within it, so negative coordinates map
//! into the chunk below zero rather than truncating toward it.

use crate::constants::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use crate::error::{Error, Result};
use bytemuck::{Pod, Zeroable};
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Edge length of a cubic chunk, fixed for the lifetime of a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ChunkSize(u32);

impl ChunkSize {
    /// Validate and wrap an edge length.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidConfig("chunk size must be non-zero".into()));
        }
        if size > MAX_CHUNK_SIZE {
            return Err(Error::InvalidConfig(format!(
                "chunk size {size} exceeds maximum of {MAX_CHUNK_SIZE}"
            )));
        }
        Ok(Self(size))
    }

    /// Edge length in voxels
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of voxels in one chunk
    #[inline]
    pub const fn volume(self) -> usize {
        let s = self.0 as usize;
        s * s * s
    }

    /// Chunk containing the voxel (floor division per axis).
    #[inline]
    pub const fn chunk_coord(self, pos: VoxelPos) -> ChunkPos {
        let s = self.0 as i32;
        ChunkPos::new(
            pos.x.div_euclid(s),
            pos.y.div_euclid(s),
            pos.z.div_euclid(s),
        )
    }

    /// Local position of the voxel within its chunk (Euclidean remainder).
    #[inline]
    pub const fn local_pos(self, pos: VoxelPos) -> LocalPos {
        let s = self.0 as i32;
        LocalPos::new(
            pos.x.rem_euclid(s) as u32,
            pos.y.rem_euclid(s) as u32,
            pos.z.rem_euclid(s) as u32,
        )
    }

    /// Flat index of the voxel inside its chunk's dense array.
    #[inline]
    pub const fn local_offset(self, pos: VoxelPos) -> usize {
        self.local_pos(pos).to_index(self)
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self(DEFAULT_CHUNK_SIZE)
    }
}

impl TryFrom<u32> for ChunkSize {
    type Error = Error;

    fn try_from(size: u32) -> Result<Self> {
        Self::new(size)
    }
}

impl From<ChunkSize> for u32 {
    fn from(size: ChunkSize) -> Self {
        size.0
    }
}

/// Position within a chunk (0 to size-1 per axis).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct LocalPos {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl LocalPos {
    /// Create a new local position
    #[inline]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Convert to linear index: `y * size² + z * size + x`.
    #[inline]
    pub const fn to_index(self, size: ChunkSize) -> usize {
        let s = size.get() as usize;
        (self.y as usize) * s * s + (self.z as usize) * s + self.x as usize
    }

    /// Create from linear index
    #[inline]
    pub const fn from_index(index: usize, size: ChunkSize) -> Self {
        let s = size.get() as usize;
        let x = (index % s) as u32;
        let z = ((index / s) % s) as u32;
        let y = (index / (s * s)) as u32;
        Self { x, y, z }
    }

    /// Convert to floating point Vec3
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

/// Chunk position in chunk coordinates.
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
#[repr(C)]
pub struct ChunkPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub _pad: i32,
}

impl ChunkPos {
    /// Create a new chunk position
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z, _pad: 0 }
    }

    /// Voxel position of the chunk's lower corner, `None` for chunks that
    /// lie past the edge of the `i32` voxel range.
    #[inline]
    pub const fn origin(self, size: ChunkSize) -> Option<VoxelPos> {
        VoxelPos::from_chunk_local(self, LocalPos::new(0, 0, 0), size)
    }
}

/// Global position of a voxel.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    /// Create a new voxel position
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Get the chunk containing this position
    #[inline]
    pub const fn chunk_pos(self, size: ChunkSize) -> ChunkPos {
        size.chunk_coord(self)
    }

    /// Get the local position within the chunk
    #[inline]
    pub const fn local_pos(self, size: ChunkSize) -> LocalPos {
        size.local_pos(self)
    }

    /// Split into chunk and local position
    #[inline]
    pub const fn split(self, size: ChunkSize) -> (ChunkPos, LocalPos) {
        (self.chunk_pos(size), self.local_pos(size))
    }

    /// Create from chunk and local position, `None` when the result does
    /// not fit in `i32`.
    #[inline]
    pub const fn from_chunk_local(
        chunk: ChunkPos,
        local: LocalPos,
        size: ChunkSize,
    ) -> Option<Self> {
        let s = size.get() as i32;
        match (
            chunk_axis(chunk.x, local.x, s),
            chunk_axis(chunk.y, local.y, s),
            chunk_axis(chunk.z, local.z, s),
        ) {
            (Some(x), Some(y), Some(z)) => Some(Self::new(x, y, z)),
            _ => None,
        }
    }

    /// Position offset by an integer vector, `None` if any axis leaves the
    /// `i32` range.
    #[inline]
    pub const fn checked_offset(self, delta: IVec3) -> Option<Self> {
        match (
            self.x.checked_add(delta.x),
            self.y.checked_add(delta.y),
            self.z.checked_add(delta.z),
        ) {
            (Some(x), Some(y), Some(z)) => Some(Self::new(x, y, z)),
            _ => None,
        }
    }

    /// Voxel containing a continuous point (floor per axis)
    #[inline]
    pub fn containing(point: Vec3) -> Self {
        Self::new(
            point.x.floor() as i32,
            point.y.floor() as i32,
            point.z.floor() as i32,
        )
    }
}

const fn chunk_axis(chunk: i32, local: u32, size: i32) -> Option<i32> {
    match chunk.checked_mul(size) {
        Some(origin) => origin.checked_add(local as i32),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(s: u32) -> ChunkSize {
        ChunkSize::new(s).unwrap()
    }

    #[test]
    fn chunk_size_rejects_zero() {
        assert!(ChunkSize::new(0).is_err());
        assert!(ChunkSize::new(MAX_CHUNK_SIZE + 1).is_err());
        assert_eq!(ChunkSize::new(MAX_CHUNK_SIZE).map(ChunkSize::get), Ok(512));
        assert_eq!(ChunkSize::new(32).unwrap().volume(), 32 * 32 * 32);
    }

    #[test]
    fn local_pos_index_roundtrip() {
        let size = size(8);
        for y in 0..8 {
            for z in 0..8 {
                for x in 0..8 {
                    let pos = LocalPos::new(x, y, z);
                    let index = pos.to_index(size);
                    assert!(index < size.volume());
                    assert_eq!(LocalPos::from_index(index, size), pos);
                }
            }
        }
    }

    #[test]
    fn local_index_layout_is_y_then_z_then_x() {
        let size = size(32);
        assert_eq!(LocalPos::new(1, 0, 0).to_index(size), 1);
        assert_eq!(LocalPos::new(0, 0, 1).to_index(size), 32);
        assert_eq!(LocalPos::new(0, 1, 0).to_index(size), 32 * 32);
    }

    #[test]
    fn negative_voxel_maps_to_negative_chunk() {
        let size = size(32);
        assert_eq!(
            size.chunk_coord(VoxelPos::new(-1, 0, 0)),
            ChunkPos::new(-1, 0, 0)
        );
        assert_eq!(size.local_offset(VoxelPos::new(-1, 0, 0)), 31);
        assert_eq!(
            size.chunk_coord(VoxelPos::new(-32, -33, 31)),
            ChunkPos::new(-1, -2, 0)
        );
        assert_eq!(
            size.local_pos(VoxelPos::new(-32, -33, 31)),
            LocalPos::new(0, 31, 31)
        );
    }

    #[test]
    fn voxel_pos_chunk_local_roundtrip() {
        let size = size(16);
        for pos in [
            VoxelPos::new(100, -50, 200),
            VoxelPos::new(-1, -1, -1),
            VoxelPos::new(-16, 15, 16),
        ] {
            let (chunk, local) = pos.split(size);
            assert_eq!(VoxelPos::from_chunk_local(chunk, local, size), Some(pos));
        }
    }

    #[test]
    fn containing_floors_negative_points() {
        assert_eq!(
            VoxelPos::containing(Vec3::new(-0.5, 0.5, -1.0)),
            VoxelPos::new(-1, 0, -1)
        );
    }

    #[test]
    fn checked_offset_stops_at_i32_edges() {
        let edge = VoxelPos::new(i32::MAX, 0, i32::MIN);
        assert_eq!(edge.checked_offset(IVec3::X), None);
        assert_eq!(edge.checked_offset(IVec3::NEG_Z), None);
        assert_eq!(
            edge.checked_offset(IVec3::NEG_X),
            Some(VoxelPos::new(i32::MAX - 1, 0, i32::MIN))
        );
        assert_eq!(
            edge.checked_offset(IVec3::Y),
            Some(VoxelPos::new(i32::MAX, 1, i32::MIN))
        );
    }

    #[test]
    fn extreme_voxels_roundtrip_through_their_chunk() {
        let size = size(32);
        for pos in [
            VoxelPos::new(i32::MAX, i32::MIN, 0),
            VoxelPos::new(i32::MIN, i32::MAX, -1),
        ] {
            let (chunk, local) = pos.split(size);
            assert_eq!(VoxelPos::from_chunk_local(chunk, local, size), Some(pos));
        }
    }

    #[test]
    fn chunks_past_the_i32_edge_have_no_voxels() {
        let size = size(3);
        // i32::MAX = 3 * 715_827_882 + 1, so the last chunk is partial.
        let last = size.chunk_coord(VoxelPos::new(i32::MAX, 0, 0));
        assert_eq!(last, ChunkPos::new(715_827_882, 0, 0));
        assert_eq!(
            VoxelPos::from_chunk_local(last, LocalPos::new(1, 0, 0), size),
            Some(VoxelPos::new(i32::MAX, 0, 0))
        );
        assert_eq!(
            VoxelPos::from_chunk_local(last, LocalPos::new(2, 0, 0), size),
            None
        );
        assert_eq!(ChunkPos::new(i32::MAX, 0, 0).origin(size), None);
        assert_eq!(
            ChunkPos::new(-2, 1, 0).origin(size),
            Some(VoxelPos::new(-6, 3, 0))
        );
    }

    #[test]
    fn chunk_size_try_from_validates() {
        assert_eq!(ChunkSize::try_from(16).map(ChunkSize::get), Ok(16));
        assert!(ChunkSize::try_from(0).is_err());
        assert_eq!(u32::from(ChunkSize::default()), DEFAULT_CHUNK_SIZE);
    }
}
