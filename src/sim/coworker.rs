//! Coworker placement and wander motion
//!
//! Coworkers are the wandering hazard targets. Placement is fully
//! deterministic: every field is drawn from one `SeededRandom` stream in a
//! fixed order (x, z, border roll, optional side + free coordinate, speed,
//! radius, phase), so identical `(count, bounds, seed)` rebuild the exact
//! same crowd. Motion is a closed-form function of elapsed time; nothing is
//! integrated.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::rng::SeededRandom;

/// A wandering NPC. `position` is the center of its wander circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coworker {
    pub position: Vec3,
    pub speed: f32,
    pub radius: f32,
    pub phase: f32,
}

impl Coworker {
    /// Ground-plane wander offset at time `t`.
    ///
    /// The z component runs at 0.9x the phase rate so the path is a
    /// drifting Lissajous loop rather than a fixed circle.
    pub fn wander_offset(&self, t: f32) -> Vec2 {
        let u = t * self.speed + self.phase;
        Vec2::new(u.cos() * self.radius, (u * 0.9).sin() * self.radius)
    }

    /// World position at time `t` (ground plane)
    pub fn wander_position(&self, t: f32) -> Vec3 {
        let offset = self.wander_offset(t);
        self.position + Vec3::new(offset.x, 0.0, offset.y)
    }

    /// Center of the hit sphere the hazard beams test against
    pub fn torso_center(&self, t: f32) -> Vec3 {
        self.wander_position(t) + Vec3::Y * COWORKER_TORSO_HEIGHT
    }
}

/// Deterministically place `count` coworkers inside `[-bounds, bounds]^2`.
///
/// With probability `COWORKER_BORDER_CHANCE` a coworker is snapped onto one
/// of the four edges (inset by `COWORKER_BORDER_INSET`), biasing the crowd
/// toward the open perimeter lanes where the player is most tempted to run.
pub fn create_coworkers(count: u32, bounds: f32, seed: u32) -> Vec<Coworker> {
    let mut rng = SeededRandom::new(seed);
    let mut list = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let mut x = -bounds + rng.next() * bounds * 2.0;
        let mut z = -bounds + rng.next() * bounds * 2.0;
        if rng.next() < COWORKER_BORDER_CHANCE {
            let side = (rng.next() * 4.0).floor() as u32;
            let edge = bounds - COWORKER_BORDER_INSET;
            match side {
                0 => {
                    x = -edge;
                    z = -bounds + rng.next() * bounds * 2.0;
                }
                1 => {
                    x = edge;
                    z = -bounds + rng.next() * bounds * 2.0;
                }
                2 => {
                    z = -edge;
                    x = -bounds + rng.next() * bounds * 2.0;
                }
                _ => {
                    z = edge;
                    x = -bounds + rng.next() * bounds * 2.0;
                }
            }
        }
        list.push(Coworker {
            position: Vec3::new(x, 0.0, z),
            speed: rng.next_range(0.6, 1.4),
            radius: rng.next_range(0.8, 1.6),
            phase: rng.next() * TAU,
        });
    }

    list
}
