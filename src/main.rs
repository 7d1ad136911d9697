//! Headless session driver
//!
//! Runs a scripted office-crawl session without any renderer attached:
//! start the session, hold forward with a slow look sweep, and report the
//! events and final state. Useful for smoke-testing the sim and for
//! eyeballing balance changes from a settings JSON.

use glam::Vec2;

use office_crawl::Settings;
use office_crawl::sim::{GameState, InputSnapshot, TickInput};

const DT: f32 = 1.0 / 60.0;
const MAX_TICKS: u32 = 60 * 120; // two simulated minutes

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let settings = args
        .next()
        .and_then(|path| std::fs::read_to_string(path).ok())
        .map(|json| Settings::from_json(&json))
        .unwrap_or_default();

    log::info!("running scripted session, seed {seed}");
    let mut state = GameState::with_settings(seed, settings);
    state.start();

    let mut tick_count = 0u32;
    while tick_count < MAX_TICKS {
        // Hold forward and sweep the view slowly to the right so the
        // walker probes the maze rather than grinding one wall.
        let input = TickInput {
            movement: InputSnapshot {
                forward: true,
                ..Default::default()
            },
            look_delta: Vec2::new(1.5, 0.0),
        };
        let events = state.tick(&input, DT);
        for event in &events {
            log::info!("t={:.1}s {:?}", state.time, event);
        }
        if state.session.result.is_some() {
            break;
        }
        tick_count += 1;
    }

    let snapshot = state.render_snapshot();
    log::info!(
        "finished after {tick_count} ticks: phase {:?}, result {:?}, level {}, player at ({:.1}, {:.1})",
        state.session.phase,
        state.session.result,
        state.session.level,
        snapshot.player_position.x,
        snapshot.player_position.z,
    );
}
