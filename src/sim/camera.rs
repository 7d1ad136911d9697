//! Mouse/touch look controller with difficulty-scaled impairment wobble
//!
//! Pointer deltas accumulate into yaw and pitch; pitch is clamped strictly
//! inside the poles to avoid gimbal flips. The wobble layers sinusoidal
//! perturbations on top of the accumulated orientation - amplitude grows
//! linearly with difficulty (zero at difficulty 0), frequency creeps up
//! with it, and roll exists only inside the wobble. Orientation is always
//! composed yaw-then-pitch-then-roll.

use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Accumulated look state. Deltas apply synchronously, so a disabled
/// controller holds its orientation with no queued motion left to flush.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LookController {
    pub yaw: f32,
    pub pitch: f32,
    enabled: bool,
    sensitivity: f32,
}

impl Default for LookController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            enabled: false,
            sensitivity: LOOK_SENSITIVITY,
        }
    }
}

impl LookController {
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            ..Self::default()
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable look input. Deltas arriving while disabled are
    /// refused rather than queued, so re-enabling never replays stale
    /// motion.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Feed a pointer/touch delta (screen pixels). Moving the pointer
    /// right turns right (yaw decreases); moving it down pitches down.
    pub fn apply_delta(&mut self, dx: f32, dy: f32) {
        if !self.enabled {
            return;
        }
        self.yaw -= dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        let limit = FRAC_PI_2 - PITCH_EPSILON;
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    /// Base orientation without impairment
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Orientation with the impairment wobble applied. `gain` is a global
    /// multiplier on the wobble amplitude (1.0 = stock).
    ///
    /// At difficulty 0 this is exactly `orientation()`.
    pub fn impaired_orientation(&self, difficulty: u8, t: f32, gain: f32) -> Quat {
        if difficulty == 0 || gain == 0.0 {
            return self.orientation();
        }
        let amp = difficulty as f32 * gain;
        let freq = 1.0 + difficulty as f32 * WOBBLE_FREQ_STEP;
        let pitch_wobble = (t * WOBBLE_PITCH_FREQ * freq).sin() * amp * WOBBLE_PITCH_GAIN;
        let yaw_wobble = (t * WOBBLE_YAW_FREQ * freq).sin() * amp * WOBBLE_YAW_GAIN;
        let roll_wobble = (t * WOBBLE_ROLL_FREQ * freq).sin() * amp * WOBBLE_ROLL_GAIN;
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw + yaw_wobble,
            self.pitch + pitch_wobble,
            roll_wobble,
        )
    }

    /// Camera forward vector for the current (unimpaired) orientation
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }
}
