//! Circle-vs-wall overlap tests and sliding movement
//!
//! The player is a circle on the ground plane; each wall footprint is an
//! AABB expanded by the agent radius (Minkowski-sum approximation). Motion
//! resolves x and z independently so a move into a wall degrades into a
//! slide along it instead of a dead stop. This is not continuous collision:
//! tunneling is possible when per-tick displacement approaches wall
//! thickness, which never happens at the shipped speeds and tick rates.

use glam::Vec2;

use crate::sim::maze::Wall;

/// Would a circular agent centered at `(x, z)` overlap any wall?
///
/// Strict inequalities: grazing contact exactly on the expanded boundary
/// does not block.
pub fn is_blocked(x: f32, z: f32, walls: &[Wall], agent_radius: f32) -> bool {
    for wall in walls {
        let half_width = wall.width / 2.0 + agent_radius;
        let half_depth = wall.depth / 2.0 + agent_radius;
        if x > wall.x - half_width
            && x < wall.x + half_width
            && z > wall.z - half_depth
            && z < wall.z + half_depth
        {
            return true;
        }
    }
    false
}

/// Apply `delta` to `pos`, accepting each axis independently.
///
/// The x candidate is tested against the current z, then the z candidate
/// against the (possibly updated) x, which is what produces wall sliding.
pub fn slide_move(pos: Vec2, delta: Vec2, walls: &[Wall], agent_radius: f32) -> Vec2 {
    let mut out = pos;
    let new_x = pos.x + delta.x;
    if !is_blocked(new_x, out.y, walls, agent_radius) {
        out.x = new_x;
    }
    let new_z = pos.y + delta.y;
    if !is_blocked(out.x, new_z, walls, agent_radius) {
        out.y = new_z;
    }
    out
}
