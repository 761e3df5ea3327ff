//! Ray segment vs. voxel grid intersection (Amanatides–Woo traversal).
//!
//! The walk runs in `f64`: in `f32` the boundary distances stop growing
//! once they pass 2^24 voxels, and a long ray would never reach its end.

use glam::{DVec3, IVec3, Vec3};
use tracing::trace;
use voxgrid_core::{Ray, RayHit, VoxelPos};

use crate::VoxelStorage;

/// Per-axis traversal state.
#[derive(Clone, Copy, Debug)]
struct AxisWalk {
    step: i32,
    t_delta: f64,
    t_max: f64,
}

impl AxisWalk {
    fn new(start: f64, cell: i32, dir: f64) -> Self {
        let step = if dir > 0.0 { 1 } else { -1 };
        let t_delta = (1.0 / dir).abs();
        let dist = if step > 0 {
            f64::from(cell) + 1.0 - start
        } else {
            start - f64::from(cell)
        };
        let t_max = if t_delta.is_finite() {
            t_delta * dist
        } else {
            f64::INFINITY
        };
        Self {
            step,
            t_delta,
            t_max,
        }
    }
}

/// Find the first solid voxel the segment from `ray.start` to `ray.end`
/// passes through.
///
/// The hit position is the exact entry point, and the normal names the
/// face crossed last (zero if the segment starts inside a solid voxel).
/// Zero-length and non-finite segments never hit.
///
/// When boundary crossings coincide, X yields to Z and Y yields to Z, so a
/// three-way tie steps Z first. A segment that would walk past the edge of
/// the `i32` voxel range stops there without a hit.
pub fn intersect_ray<S>(storage: &S, ray: &Ray) -> Option<RayHit>
where
    S: VoxelStorage + ?Sized,
{
    if !ray.start.is_finite() || !ray.end.is_finite() {
        return None;
    }
    let start = ray.start.as_dvec3();
    let delta = ray.end.as_dvec3() - start;
    let dir = delta.try_normalize()?;
    let len = delta.length();

    let mut cell = VoxelPos::containing(ray.start);
    let mut x = AxisWalk::new(start.x, cell.x, dir.x);
    let mut y = AxisWalk::new(start.y, cell.y, dir.y);
    let mut z = AxisWalk::new(start.z, cell.z, dir.z);

    let mut t = 0.0_f64;
    let mut normal = IVec3::ZERO;
    while t <= len {
        let voxel = storage.get_voxel(cell);
        if voxel.is_solid() {
            trace!(?cell, t, "ray hit");
            return Some(RayHit {
                position: hit_position(start, dir, t),
                normal,
                voxel,
            });
        }

        if x.t_max < y.t_max {
            if x.t_max < z.t_max {
                cell.x = cell.x.checked_add(x.step)?;
                t = x.t_max;
                x.t_max += x.t_delta;
                normal = IVec3::new(-x.step, 0, 0);
            } else {
                cell.z = cell.z.checked_add(z.step)?;
                t = z.t_max;
                z.t_max += z.t_delta;
                normal = IVec3::new(0, 0, -z.step);
            }
        } else if y.t_max < z.t_max {
            cell.y = cell.y.checked_add(y.step)?;
            t = y.t_max;
            y.t_max += y.t_delta;
            normal = IVec3::new(0, -y.step, 0);
        } else {
            cell.z = cell.z.checked_add(z.step)?;
            t = z.t_max;
            z.t_max += z.t_delta;
            normal = IVec3::new(0, 0, -z.step);
        }
    }
    None
}

fn hit_position(start: DVec3, dir: DVec3, t: f64) -> Vec3 {
    (start + dir * t).as_vec3()
}

/// Convenience for callers holding a start point and a direction.
pub fn intersect_ray_from<S>(
    storage: &S,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> Option<RayHit>
where
    S: VoxelStorage + ?Sized,
{
    let ray = Ray::from_direction(origin, direction, max_distance);
    intersect_ray(storage, &ray)
}
