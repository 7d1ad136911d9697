//! Ray intersection primitives and hazard beam resolution
//!
//! The laser-vision hazard fires two forward beams per tick. Each beam is
//! resolved against every wall (slab-method ray/AABB), every coworker
//! (ray/sphere at torso height), the floor plane, and the ceiling plane;
//! the nearest positive distance wins, capped at the beam range. The
//! primitives are plain functions so they stay independent of the two-beam
//! call site.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::GEOM_EPSILON;
use crate::consts::*;
use crate::sim::coworker::Coworker;
use crate::sim::maze::Wall;

/// What a beam terminated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitKind {
    Wall,
    Coworker,
    Floor,
    Ceiling,
    /// Nothing within range; the beam ends at its maximum length
    MaxRange,
}

/// Resolved beam terminus for one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamHit {
    pub distance: f32,
    pub kind: HitKind,
}

/// Slab-method ray/AABB intersection.
///
/// Returns the entry distance, or `None` when any per-axis interval is
/// empty or the box lies entirely behind the origin. Near-zero direction
/// components degrade to an origin-inside-slab test.
pub fn ray_aabb(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < GEOM_EPSILON {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let t1 = (min[axis] - o) / d;
        let t2 = (max[axis] - o) / d;
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        t_near = t_near.max(lo);
        t_far = t_far.min(hi);
        if t_near > t_far || t_far < 0.0 {
            return None;
        }
    }

    (t_near > 0.0).then_some(t_near)
}

/// Nearest positive root of the ray/sphere quadratic, if any
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let a = dir.length_squared();
    if a < GEOM_EPSILON {
        return None;
    }
    let half_b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t1 = (-half_b - sqrt_d) / a;
    if t1 > 0.0 {
        return Some(t1);
    }
    let t2 = (-half_b + sqrt_d) / a;
    (t2 > 0.0).then_some(t2)
}

/// Intersection with the horizontal plane `y = height`.
///
/// Degenerate (near-horizontal) rays and hits behind the origin return
/// `None`.
pub fn ray_plane_y(origin: Vec3, dir: Vec3, height: f32) -> Option<f32> {
    if dir.y.abs() < GEOM_EPSILON {
        return None;
    }
    let t = (height - origin.y) / dir.y;
    (t > 0.0).then_some(t)
}

/// Resolve one hazard beam against the current level.
///
/// A coworker is reported only when it is strictly the nearest candidate;
/// a floor or ceiling hit in front of it means the beam is physically
/// blocked before reaching the body.
pub fn cast_beam(
    origin: Vec3,
    dir: Vec3,
    walls: &[Wall],
    coworkers: &[Coworker],
    t: f32,
    max_range: f32,
) -> BeamHit {
    let mut env = BeamHit {
        distance: max_range,
        kind: HitKind::MaxRange,
    };

    for wall in walls {
        let (min, max) = wall.aabb();
        if let Some(d) = ray_aabb(origin, dir, min, max) {
            if d < env.distance {
                env = BeamHit {
                    distance: d,
                    kind: HitKind::Wall,
                };
            }
        }
    }
    if let Some(d) = ray_plane_y(origin, dir, 0.0) {
        if d < env.distance {
            env = BeamHit {
                distance: d,
                kind: HitKind::Floor,
            };
        }
    }
    if let Some(d) = ray_plane_y(origin, dir, CEILING_HEIGHT) {
        if d < env.distance {
            env = BeamHit {
                distance: d,
                kind: HitKind::Ceiling,
            };
        }
    }

    let mut nearest_coworker = f32::INFINITY;
    for coworker in coworkers {
        if let Some(d) = ray_sphere(origin, dir, coworker.torso_center(t), COWORKER_HIT_RADIUS) {
            nearest_coworker = nearest_coworker.min(d);
        }
    }

    if nearest_coworker < env.distance {
        BeamHit {
            distance: nearest_coworker,
            kind: HitKind::Coworker,
        }
    } else {
        env
    }
}
