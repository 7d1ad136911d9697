//! Office Crawl - first-person cubicle maze escape
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze generation, movement, collisions,
//!   hazard beams, game state)
//! - `settings`: Data-driven gameplay tunables
//!
//! Rendering, audio, and raw input capture live outside this crate; the sim
//! exchanges plain snapshot structs with them each frame.

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    /// One maze cell edge length; the floor is a 2x2 tiling of cells
    pub const TILE_SIZE: f32 = 30.0;
    /// Number of cells along each floor axis
    pub const TILE_COUNT: u32 = 2;
    /// Full floor edge length
    pub const FLOOR_SIZE: f32 = TILE_SIZE * TILE_COUNT as f32;

    /// Cubicle partition thickness
    pub const WALL_THICKNESS: f32 = 0.3;
    /// Interior wall height
    pub const WALL_HEIGHT: f32 = 2.0;
    /// Perimeter wall height
    pub const BORDER_HEIGHT: f32 = 4.0;
    /// Gap between perimeter blockers
    pub const BORDER_SPACING: f32 = 10.0;
    /// Length of each perimeter blocker stub
    pub const BLOCKER_LENGTH: f32 = 5.0;
    /// Ceiling plane height (beam occlusion only; never rendered here)
    pub const CEILING_HEIGHT: f32 = 5.0;

    /// Player top speed (units/sec)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Exponential damping constant for velocity smoothing
    pub const PLAYER_ACCEL: f32 = 10.0;
    /// Player collision radius
    pub const PLAYER_RADIUS: f32 = 0.4;
    /// Camera height above the ground plane
    pub const EYE_HEIGHT: f32 = 1.6;
    /// Planar distance at which the exit triggers (strict)
    pub const EXIT_RADIUS: f32 = 1.5;

    /// Maximum hazard beam length
    pub const BEAM_RANGE: f32 = 30.0;
    /// Lateral distance between the two beam origins
    pub const BEAM_SEPARATION: f32 = 0.44;

    /// Coworker hit sphere radius (upper torso and head)
    pub const COWORKER_HIT_RADIUS: f32 = 0.5;
    /// Height of the coworker hit sphere center above the floor; high
    /// enough that a level beam at eye height intersects it
    pub const COWORKER_TORSO_HEIGHT: f32 = 1.4;
    /// Chance a coworker spawns snapped to the perimeter
    pub const COWORKER_BORDER_CHANCE: f32 = 0.35;
    /// Inset from the bounds edge for border-snapped coworkers
    pub const COWORKER_BORDER_INSET: f32 = 0.8;

    /// Mouse-look sensitivity (radians per pixel of pointer delta)
    pub const LOOK_SENSITIVITY: f32 = 0.0025;
    /// Pitch stays strictly inside +/-(PI/2 - this)
    pub const PITCH_EPSILON: f32 = 0.01;

    /// Level and difficulty cap
    pub const MAX_LEVEL: u8 = 8;

    /// Impairment wobble amplitude per difficulty step (pitch, yaw, roll)
    pub const WOBBLE_PITCH_GAIN: f32 = 0.012;
    pub const WOBBLE_YAW_GAIN: f32 = 0.018;
    pub const WOBBLE_ROLL_GAIN: f32 = 0.025;
    /// Base wobble frequencies in rad/sec (pitch, yaw, roll)
    pub const WOBBLE_PITCH_FREQ: f32 = 0.9;
    pub const WOBBLE_YAW_FREQ: f32 = 0.7;
    pub const WOBBLE_ROLL_FREQ: f32 = 1.1;
    /// Frequency multiplier gained per difficulty step
    pub const WOBBLE_FREQ_STEP: f32 = 0.05;
}

/// Epsilon for degenerate-vector and near-zero-ray guards
pub const GEOM_EPSILON: f32 = 1e-5;

/// Project a 3D direction onto the ground plane and renormalize.
///
/// Returns the fixed default forward (-Z) when the projection is degenerate
/// (camera looking straight up or down).
#[inline]
pub fn ground_forward(dir: Vec3) -> Vec3 {
    let flat = Vec3::new(dir.x, 0.0, dir.z);
    if flat.length_squared() < GEOM_EPSILON {
        Vec3::NEG_Z
    } else {
        flat.normalize()
    }
}

/// Planar (x,z) distance between two points, ignoring height
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}
