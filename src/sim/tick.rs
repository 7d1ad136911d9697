//! Per-frame simulation tick
//!
//! `GameState` owns everything the session needs: the phase machine, the
//! current level's walls/coworkers/exit, the player, the look controller,
//! and the hazard beam results. The host calls `tick` once per frame with
//! an input snapshot and reads `render_snapshot` afterwards; all state
//! mutation happens inside that call.

use glam::{Quat, Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::camera::LookController;
use crate::sim::coworker::{Coworker, create_coworkers};
use crate::sim::maze::{Wall, level_walls_with};
use crate::sim::player::{InputSnapshot, Player};
use crate::sim::raycast::{BeamHit, HitKind, cast_beam};
use crate::sim::state::{GameEvent, GameOutcome, GamePhase, Session};

/// Distance from the floor edge to the spawn/exit corners and the
/// coworker placement bounds
const CORNER_INSET: f32 = 4.0;

/// Seed offset for per-level coworker generation
const COWORKER_SEED_BASE: u32 = 100;

/// Input for a single tick (coalesced snapshots, no event queues)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Movement controls
    pub movement: InputSnapshot,
    /// Accumulated pointer/touch look delta since the previous tick, in
    /// screen pixels
    pub look_delta: Vec2,
}

/// One hazard beam endpoint pair for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub kind: HitKind,
}

/// Per-frame boundary data for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub camera_position: Vec3,
    pub camera_orientation: Quat,
    /// Player ground position (capsule root; normally invisible first person)
    pub player_position: Vec3,
    /// Current world position of every coworker
    pub coworker_positions: Vec<Vec3>,
    pub beams: [BeamSegment; 2],
    pub exit_position: Vec3,
}

/// Complete session state, mutated only by `tick` and the action methods
#[derive(Debug, Clone)]
pub struct GameState {
    pub session: Session,
    pub settings: Settings,
    pub walls: Vec<Wall>,
    pub coworkers: Vec<Coworker>,
    pub exit: Vec3,
    pub player: Player,
    pub look: LookController,
    /// Last tick's resolved beams (left, right)
    pub beams: [BeamHit; 2],
    /// Edge-trigger latch: set on the first coworker hit of a level,
    /// cleared on level change and restart
    coworker_hit_fired: bool,
    /// Elapsed simulation time (drives wander motion and wobble)
    pub time: f32,
    seed: u64,
    corner_rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        let mut state = Self {
            session: Session::new(),
            settings,
            walls: Vec::new(),
            coworkers: Vec::new(),
            exit: Vec3::ZERO,
            player: Player::new(Self::spawn_corner()),
            look: LookController::with_sensitivity(settings.look_sensitivity),
            beams: [BeamHit {
                distance: settings.beam_range,
                kind: HitKind::MaxRange,
            }; 2],
            coworker_hit_fired: false,
            time: 0.0,
            seed,
            corner_rng: Pcg32::seed_from_u64(seed),
        };
        state.build_level();
        state
    }

    fn spawn_corner() -> Vec3 {
        let c = FLOOR_SIZE / 2.0 - CORNER_INSET;
        Vec3::new(-c, 0.0, -c)
    }

    fn coworker_count(difficulty: u8) -> u32 {
        (20u32 << difficulty).min(32)
    }

    /// Rebuild walls, coworkers, and the exit for the current level, and
    /// put the player back on the spawn corner.
    fn build_level(&mut self) {
        let level = self.session.level;
        self.walls = level_walls_with(
            level,
            self.settings.border_spacing,
            self.settings.blocker_length,
        );

        let bounds = FLOOR_SIZE / 2.0 - CORNER_INSET;
        self.coworkers = create_coworkers(
            Self::coworker_count(self.session.difficulty),
            bounds,
            COWORKER_SEED_BASE + level as u32,
        );

        // Exit goes to one of the three corners away from the spawn
        let c = FLOOR_SIZE / 2.0 - CORNER_INSET;
        let corners = [
            Vec3::new(c, 0.0, -c),
            Vec3::new(c, 0.0, c),
            Vec3::new(-c, 0.0, c),
        ];
        self.exit = corners[self.corner_rng.random_range(0..corners.len())];

        self.player = Player::new(Self::spawn_corner());
        self.coworker_hit_fired = false;
        log::info!(
            "level {} built: {} walls, {} coworkers, exit at ({:.0}, {:.0})",
            level,
            self.walls.len(),
            self.coworkers.len(),
            self.exit.x,
            self.exit.z,
        );
    }

    /// UI action: begin playing (no-op unless Ready)
    pub fn start(&mut self) {
        self.session.start();
        if self.session.phase == GamePhase::Playing {
            self.look.set_enabled(true);
            log::info!("session started (seed {})", self.seed);
        }
    }

    /// UI action: back to the menu, level 0, fresh slate
    pub fn restart(&mut self) {
        self.session.restart();
        self.look = LookController::with_sensitivity(self.settings.look_sensitivity);
        self.time = 0.0;
        self.corner_rng = Pcg32::seed_from_u64(self.seed);
        self.build_level();
        log::info!("session restarted");
    }

    fn end(&mut self, outcome: GameOutcome, events: &mut Vec<GameEvent>) {
        self.session.end(outcome);
        self.look.set_enabled(false);
        events.push(GameEvent::GameEnded(outcome));
        log::info!("session ended: {:?}", outcome);
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Wander time always advances (the menu scene animates too); input,
    /// movement, beams, and transitions only apply while `Playing`.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.time += dt;

        if self.session.phase != GamePhase::Playing {
            return events;
        }

        self.look.apply_delta(input.look_delta.x, input.look_delta.y);
        let camera_forward = self.look.forward();

        self.player.step(
            &input.movement,
            camera_forward,
            &self.walls,
            self.settings.player_speed,
            self.settings.player_accel,
            self.settings.player_radius,
            dt,
        );

        self.cast_beams(camera_forward);

        let beam_hit_coworker = self.beams.iter().any(|b| b.kind == HitKind::Coworker);
        if beam_hit_coworker && !self.coworker_hit_fired {
            self.coworker_hit_fired = true;
            events.push(GameEvent::HitCoworker);
            self.end(GameOutcome::Lose, &mut events);
            return events;
        }

        if self.player.at_exit(self.exit, self.settings.exit_radius) {
            events.push(GameEvent::ReachedExit);
            if self.session.on_final_level() {
                self.end(GameOutcome::Win, &mut events);
            } else {
                self.session.advance_level();
                events.push(GameEvent::LevelAdvanced {
                    level: self.session.level,
                });
                self.build_level();
            }
        }

        events
    }

    /// Resolve both hazard beams from the current eye pose
    fn cast_beams(&mut self, camera_forward: Vec3) {
        let eye = self.player.eye(self.settings.eye_height);
        let right = self.look.orientation() * Vec3::X;
        let half_sep = self.settings.beam_separation / 2.0;

        for (i, side) in [-1.0f32, 1.0].into_iter().enumerate() {
            let origin = eye + right * (side * half_sep);
            self.beams[i] = cast_beam(
                origin,
                camera_forward,
                &self.walls,
                &self.coworkers,
                self.time,
                self.settings.beam_range,
            );
        }
    }

    /// Boundary data for the renderer, valid for the tick just computed
    pub fn render_snapshot(&self) -> RenderSnapshot {
        let eye = self.player.eye(self.settings.eye_height);
        let orientation = self.look.impaired_orientation(
            self.session.difficulty,
            self.time,
            self.settings.wobble_gain,
        );
        let forward = self.look.forward();
        let right = self.look.orientation() * Vec3::X;
        let half_sep = self.settings.beam_separation / 2.0;

        let beams = [
            self.beam_segment(eye - right * half_sep, forward, self.beams[0]),
            self.beam_segment(eye + right * half_sep, forward, self.beams[1]),
        ];

        RenderSnapshot {
            camera_position: eye,
            camera_orientation: orientation,
            player_position: self.player.position,
            coworker_positions: self
                .coworkers
                .iter()
                .map(|c| c.wander_position(self.time))
                .collect(),
            beams,
            exit_position: self.exit,
        }
    }

    fn beam_segment(&self, origin: Vec3, dir: Vec3, hit: BeamHit) -> BeamSegment {
        BeamSegment {
            start: origin,
            end: origin + dir * hit.distance,
            kind: hit.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn forward_input() -> TickInput {
        TickInput {
            movement: InputSnapshot {
                forward: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_ready_phase_ignores_input() {
        let mut state = GameState::new(1);
        let before = state.player.position;
        state.tick(&forward_input(), DT);
        assert_eq!(state.player.position, before);
        assert_eq!(state.session.phase, GamePhase::Ready);
    }

    #[test]
    fn test_time_advances_even_when_ready() {
        let mut state = GameState::new(1);
        state.tick(&TickInput::default(), DT);
        assert!(state.time > 0.0);
    }

    #[test]
    fn test_start_enables_look_and_playing() {
        let mut state = GameState::new(1);
        state.start();
        assert_eq!(state.session.phase, GamePhase::Playing);
        assert!(state.look.enabled());
    }

    #[test]
    fn test_playing_moves_player() {
        let mut state = GameState::new(1);
        state.start();
        for _ in 0..30 {
            state.tick(&forward_input(), DT);
        }
        assert_ne!(state.player.position, GameState::spawn_corner());
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = GameState::new(777);
        let mut b = GameState::new(777);
        a.start();
        b.start();
        for _ in 0..120 {
            let input = forward_input();
            a.tick(&input, DT);
            b.tick(&input, DT);
        }
        assert_eq!(a.player.position, b.player.position);
        assert_eq!(a.exit, b.exit);
        assert_eq!(a.coworkers, b.coworkers);
    }

    #[test]
    fn test_exit_advances_level_and_rebuilds() {
        let mut state = GameState::new(5);
        state.start();
        state.coworkers.clear(); // keep the beams out of this test
        let first_exit = state.exit;
        // Teleport next to the exit and tick once
        state.player.position = first_exit + Vec3::new(0.5, 0.0, 0.0);
        let events = state.tick(&TickInput::default(), DT);
        assert!(events.contains(&GameEvent::ReachedExit));
        assert!(events.contains(&GameEvent::LevelAdvanced { level: 1 }));
        assert_eq!(state.session.level, 1);
        assert_eq!(state.session.difficulty, 1);
        assert_eq!(state.player.position, GameState::spawn_corner());
        assert_eq!(state.session.phase, GamePhase::Playing);
    }

    #[test]
    fn test_final_level_exit_wins() {
        let mut state = GameState::new(5);
        state.start();
        for _ in 0..8 {
            state.session.advance_level();
        }
        state.build_level();
        state.coworkers.clear();
        assert!(state.session.on_final_level());
        state.player.position = state.exit;
        let events = state.tick(&TickInput::default(), DT);
        assert!(events.contains(&GameEvent::GameEnded(GameOutcome::Win)));
        assert_eq!(state.session.phase, GamePhase::Ended);
        assert!(!state.look.enabled());
    }

    #[test]
    fn test_coworker_hit_is_edge_triggered_and_loses() {
        let mut state = GameState::new(5);
        state.start();
        // Plant a coworker dead ahead with no walls in between
        state.walls.clear();
        state.coworkers = vec![Coworker {
            position: state.player.position + Vec3::new(0.0, 0.0, -5.0),
            speed: 0.0,
            radius: 0.0,
            phase: 0.0,
        }];
        let events = state.tick(&TickInput::default(), DT);
        assert!(events.contains(&GameEvent::HitCoworker));
        assert!(events.contains(&GameEvent::GameEnded(GameOutcome::Lose)));
        assert_eq!(state.session.result, Some(GameOutcome::Lose));

        // Further ticks with the beam still on target fire nothing
        let events = state.tick(&TickInput::default(), DT);
        assert!(events.is_empty());
    }

    #[test]
    fn test_hit_latch_clears_on_level_change() {
        let mut state = GameState::new(5);
        state.start();
        state.coworkers.clear();
        state.coworker_hit_fired = true;
        state.player.position = state.exit;
        state.tick(&TickInput::default(), DT);
        assert!(!state.coworker_hit_fired);
    }

    #[test]
    fn test_restart_returns_to_ready_level_zero() {
        let mut state = GameState::new(5);
        state.start();
        state.session.advance_level();
        state.restart();
        assert_eq!(state.session.phase, GamePhase::Ready);
        assert_eq!(state.session.level, 0);
        assert_eq!(state.session.difficulty, 0);
        assert!(!state.look.enabled());
        assert_eq!(state.time, 0.0);
    }

    #[test]
    fn test_coworker_count_saturates() {
        assert_eq!(GameState::coworker_count(0), 20);
        assert_eq!(GameState::coworker_count(1), 32);
        assert_eq!(GameState::coworker_count(8), 32);
    }

    #[test]
    fn test_exit_never_on_spawn_corner() {
        for seed in 0..32 {
            let state = GameState::new(seed);
            assert_ne!(state.exit, GameState::spawn_corner());
        }
    }

    #[test]
    fn test_render_snapshot_shape() {
        let mut state = GameState::new(9);
        state.start();
        state.tick(&forward_input(), DT);
        let snap = state.render_snapshot();
        assert_eq!(snap.coworker_positions.len(), state.coworkers.len());
        assert!((snap.camera_position.y - state.settings.eye_height).abs() < 1e-6);
        // Beam segments start at the laterally offset eye positions
        let sep = (snap.beams[0].start - snap.beams[1].start).length();
        assert!((sep - state.settings.beam_separation).abs() < 1e-5);
    }
}
