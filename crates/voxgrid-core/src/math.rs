//! Ray segments and hit records for voxel picking.

use glam::{IVec3, Vec3};

use crate::coords::VoxelPos;
use crate::types::VoxelType;

/// Ray segment from `start` to `end` in voxel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Segment start
    pub start: Vec3,
    /// Segment end
    pub end: Vec3,
}

impl Ray {
    /// Create a new ray segment
    #[inline]
    pub const fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Segment starting at `origin` travelling `max_distance` along `direction`.
    ///
    /// A zero or non-finite direction yields a degenerate segment.
    pub fn from_direction(origin: Vec3, direction: Vec3, max_distance: f32) -> Self {
        let end = origin + direction.normalize_or_zero() * max_distance;
        Self { start: origin, end }
    }

    /// Length of the segment
    #[inline]
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    /// Unit direction, or `None` if the segment has zero or non-finite length.
    #[inline]
    pub fn direction(&self) -> Option<Vec3> {
        (self.end - self.start).try_normalize()
    }

    /// Get the point at distance `t` from the start along the segment direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.start + self.direction().unwrap_or(Vec3::ZERO) * t
    }
}

/// First solid voxel struck by a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Exact point where the ray entered the voxel
    pub position: Vec3,
    /// Outward normal of the struck face; zero when the ray started inside the voxel
    pub normal: IVec3,
    /// Type of the struck voxel
    pub voxel: VoxelType,
}

impl RayHit {
    /// The solid voxel that was struck.
    #[inline]
    pub fn struck_voxel(&self) -> VoxelPos {
        VoxelPos::containing(self.position - self.normal.as_vec3() * 0.5)
    }

    /// The empty voxel on the outside of the struck face.
    #[inline]
    pub fn adjacent_voxel(&self) -> VoxelPos {
        VoxelPos::containing(self.position + self.normal.as_vec3() * 0.5)
    }
}
