//! Player movement controller
//!
//! Input is a coalesced snapshot per tick, never an event queue. Steering
//! is camera-relative on the ground plane, velocity approaches the desired
//! value with frame-rate-independent exponential damping, and the position
//! integrates through the sliding collision filter.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::sim::collision::slide_move;
use crate::sim::maze::Wall;
use crate::{ground_forward, planar_distance};

/// Latest-known-value input state sampled at the start of a tick.
///
/// Digital keys and the analog touch vector (joystick emulation, each axis
/// in [-1, 1]) combine additively; the combined direction is renormalized
/// only when it exceeds unit length so partial stick deflections keep
/// their intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    /// Analog move vector: +x strafes right, +y moves forward
    pub move_axis: Vec2,
}

impl InputSnapshot {
    /// Combined ground-plane intent: x strafe, y forward, length <= 1
    pub fn direction(&self) -> Vec2 {
        let mut dir = self.move_axis;
        if self.forward {
            dir.y += 1.0;
        }
        if self.back {
            dir.y -= 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        if dir.length_squared() > 1.0 {
            dir = dir.normalize();
        }
        dir
    }
}

/// The player: a circle on the ground plane with a damped velocity state.
/// `position.y` is always 0; the camera adds the eye-height offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Player {
    pub fn new(spawn: Vec3) -> Self {
        Self {
            position: Vec3::new(spawn.x, 0.0, spawn.z),
            velocity: Vec3::ZERO,
        }
    }

    /// Camera position for the renderer
    pub fn eye(&self, eye_height: f32) -> Vec3 {
        self.position + Vec3::Y * eye_height
    }

    /// Advance one tick: steer, damp, integrate, collide.
    ///
    /// `camera_forward` is the raw camera look direction; it is flattened to
    /// the ground plane here (with the -Z fallback when looking straight up
    /// or down).
    pub fn step(
        &mut self,
        input: &InputSnapshot,
        camera_forward: Vec3,
        walls: &[Wall],
        top_speed: f32,
        accel: f32,
        agent_radius: f32,
        dt: f32,
    ) {
        let forward = ground_forward(camera_forward);
        let right = forward.cross(Vec3::Y);

        let dir = input.direction();
        let desired = (forward * dir.y + right * dir.x) * top_speed;

        // 1 - e^(-k*dt): identical smoothing whatever the frame rate
        let blend = 1.0 - (-accel * dt).exp();
        self.velocity += (desired - self.velocity) * blend;

        let moved = slide_move(
            Vec2::new(self.position.x, self.position.z),
            Vec2::new(self.velocity.x * dt, self.velocity.z * dt),
            walls,
            agent_radius,
        );
        self.position.x = moved.x;
        self.position.z = moved.y;
    }

    /// Strictly inside the exit trigger radius?
    pub fn at_exit(&self, exit: Vec3, exit_radius: f32) -> bool {
        planar_distance(self.position, exit) < exit_radius
    }
}
