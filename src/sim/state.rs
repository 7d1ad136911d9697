//! Game-phase state machine
//!
//! One authority owns the phase/result/level/difficulty fields; everything
//! else reads snapshots and calls the named transitions. Every transition
//! is total: calling it from the wrong phase is a silent no-op, never an
//! error, so UI wiring can fire actions without guarding.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_LEVEL;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Menu/idle, waiting for `start`
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Run finished; `result` says how
    Ended,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Win,
    Lose,
}

/// Things the tick loop reports outward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player entered the exit trigger radius
    ReachedExit,
    /// A non-final exit bumped the level (and difficulty)
    LevelAdvanced { level: u8 },
    /// A hazard beam struck a coworker (fires once per level)
    HitCoworker,
    /// The session moved to `Ended`
    GameEnded(GameOutcome),
}

/// Phase/result/level/difficulty, mutated only through the named
/// transitions below.
///
/// Invariant: `result` is `Some` exactly when `phase == Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Session {
    pub phase: GamePhase,
    pub result: Option<GameOutcome>,
    pub level: u8,
    pub difficulty: u8,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ready -> Playing. No-op from any other phase.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Ready {
            self.phase = GamePhase::Playing;
            self.result = None;
        }
    }

    /// Playing -> Ended with an outcome. No-op otherwise.
    pub fn end(&mut self, outcome: GameOutcome) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Ended;
            self.result = Some(outcome);
        }
    }

    /// Bump level and difficulty, both capped at `MAX_LEVEL`. Legal only
    /// while playing.
    pub fn advance_level(&mut self) {
        if self.phase == GamePhase::Playing {
            self.level = (self.level + 1).min(MAX_LEVEL);
            self.difficulty = (self.difficulty + 1).min(MAX_LEVEL);
        }
    }

    /// Back to Ready with a clean slate. Difficulty resets along with the
    /// level: a restarted session is indistinguishable from a fresh one.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Ready;
        self.result = None;
        self.level = 0;
        self.difficulty = 0;
    }

    /// Is this the last level before a win?
    pub fn on_final_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut s = Session::new();
        assert_eq!(s.phase, GamePhase::Ready);
        s.start();
        assert_eq!(s.phase, GamePhase::Playing);
        assert_eq!(s.result, None);
        s.end(GameOutcome::Win);
        assert_eq!(s.phase, GamePhase::Ended);
        assert_eq!(s.result, Some(GameOutcome::Win));
        s.restart();
        assert_eq!(s.phase, GamePhase::Ready);
        assert_eq!(s.result, None);
        assert_eq!(s.level, 0);
    }

    #[test]
    fn test_end_from_ready_is_noop() {
        let mut s = Session::new();
        s.end(GameOutcome::Win);
        assert_eq!(s.phase, GamePhase::Ready);
        assert_eq!(s.result, None);
    }

    #[test]
    fn test_start_from_playing_is_noop() {
        let mut s = Session::new();
        s.start();
        s.end(GameOutcome::Lose);
        let ended = s;
        s.start();
        assert_eq!(s, ended, "start is only legal from Ready");
    }

    #[test]
    fn test_advance_level_caps_at_max() {
        let mut s = Session::new();
        s.start();
        for _ in 0..20 {
            s.advance_level();
        }
        assert_eq!(s.level, MAX_LEVEL);
        assert_eq!(s.difficulty, MAX_LEVEL);
    }

    #[test]
    fn test_advance_level_requires_playing() {
        let mut s = Session::new();
        s.advance_level();
        assert_eq!(s.level, 0);
    }

    #[test]
    fn test_restart_resets_difficulty() {
        let mut s = Session::new();
        s.start();
        s.advance_level();
        s.advance_level();
        s.end(GameOutcome::Lose);
        s.restart();
        assert_eq!(s.level, 0);
        assert_eq!(s.difficulty, 0);
    }

    #[test]
    fn test_result_only_when_ended() {
        let mut s = Session::new();
        assert!(s.result.is_none());
        s.start();
        assert!(s.result.is_none());
        s.end(GameOutcome::Lose);
        assert!(s.result.is_some());
        s.restart();
        assert!(s.result.is_none());
    }
}
