//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (the level LCG and a session Pcg32)
//! - All mutation happens inside the per-frame tick
//! - No rendering or platform dependencies
//!
//! Geometry convention: x/z is the ground plane, +y is up. The camera default
//! forward is -Z.

pub mod camera;
pub mod collision;
pub mod coworker;
pub mod maze;
pub mod player;
pub mod raycast;
pub mod rng;
pub mod state;
pub mod tick;

pub use camera::LookController;
pub use collision::{is_blocked, slide_move};
pub use coworker::{Coworker, create_coworkers};
pub use maze::{Wall, generate_border, generate_border_blockers, generate_layout, level_walls, tile};
pub use player::{InputSnapshot, Player};
pub use raycast::{BeamHit, HitKind, cast_beam, ray_aabb, ray_plane_y, ray_sphere};
pub use rng::SeededRandom;
pub use state::{GameEvent, GameOutcome, GamePhase, Session};
pub use tick::{BeamSegment, GameState, RenderSnapshot, TickInput};
