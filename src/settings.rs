//! Gameplay tunables
//!
//! Every externally overridable gameplay constant lives here. Defaults
//! mirror `consts`; a host can ship a JSON blob to rebalance without
//! recompiling. Malformed input falls back to defaults - tuning is never a
//! reason to fail to boot.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Externally overridable gameplay constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Player top speed (units/sec)
    pub player_speed: f32,
    /// Velocity damping constant k in `1 - e^(-k*dt)`
    pub player_accel: f32,
    /// Player collision radius
    pub player_radius: f32,
    /// Camera height above the ground plane
    pub eye_height: f32,
    /// Maximum hazard beam length
    pub beam_range: f32,
    /// Lateral distance between the two beam origins
    pub beam_separation: f32,
    /// Exit trigger radius (strict)
    pub exit_radius: f32,
    /// Gap between perimeter blockers
    pub border_spacing: f32,
    /// Length of each perimeter blocker stub
    pub blocker_length: f32,
    /// Mouse-look sensitivity (radians per pixel)
    pub look_sensitivity: f32,
    /// Global multiplier on the impairment wobble amplitude
    pub wobble_gain: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            player_accel: PLAYER_ACCEL,
            player_radius: PLAYER_RADIUS,
            eye_height: EYE_HEIGHT,
            beam_range: BEAM_RANGE,
            beam_separation: BEAM_SEPARATION,
            exit_radius: EXIT_RADIUS,
            border_spacing: BORDER_SPACING,
            blocker_length: BLOCKER_LENGTH,
            look_sensitivity: LOOK_SENSITIVITY,
            wobble_gain: 1.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, falling back to defaults on any error.
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("ignoring malformed settings: {err}");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Serialization of plain floats cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mirror_consts() {
        let s = Settings::default();
        assert_eq!(s.player_speed, PLAYER_SPEED);
        assert_eq!(s.exit_radius, EXIT_RADIUS);
        assert_eq!(s.beam_separation, BEAM_SEPARATION);
    }

    #[test]
    fn test_json_round_trip() {
        let mut s = Settings::default();
        s.player_speed = 7.5;
        s.wobble_gain = 0.25;
        let restored = Settings::from_json(&s.to_json());
        assert_eq!(s, restored);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"player_speed": 9.0}"#);
        assert_eq!(s.player_speed, 9.0);
        assert_eq!(s.eye_height, EYE_HEIGHT);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let s = Settings::from_json("not json at all");
        assert_eq!(s, Settings::default());
    }
}
