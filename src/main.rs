//! Pixel Runner headless driver
//!
//! Runs a scripted session against the simulation core and prints the
//! outcome plus a final render snapshot as JSON. Useful as a smoke test and
//! as the reference for wiring a real presentation layer: one tick per
//! frame, wall-clock milliseconds in, read-only snapshot out.

use pixel_runner::sim::{GamePhase, GameState, TickInput, ViewportConfig, tick};

/// Nominal frame interval at 60 Hz, ms
const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Pixel Runner (headless) starting...");

    let cfg = ViewportConfig {
        width: 1280.0,
        height: 720.0,
    };
    let mut state = match GameState::new(0xC01A_F00D, &cfg) {
        Ok(state) => state,
        Err(e) => {
            log::error!("session setup failed: {e}");
            std::process::exit(1);
        }
    };
    state.start(0.0);

    // Script: run right, hopping every second to clear ground hazards
    let mut now_ms = 0.0;
    let max_ticks = 60 * 120; // two minutes, more than enough to cross
    for i in 0..max_ticks {
        let input = TickInput {
            move_right: true,
            jump_pressed: i % 60 == 0,
            ..Default::default()
        };
        tick(&mut state, &input, now_ms);
        now_ms += FRAME_MS;

        if state.phase != GamePhase::Playing {
            break;
        }
    }

    let outcome = match state.phase {
        GamePhase::Won => "won",
        GamePhase::Lost => "lost",
        _ => "timed out",
    };
    log::info!(
        "run {}: score={}, lives={}, {}s, {} ticks",
        outcome,
        state.score,
        state.lives,
        state.elapsed_seconds,
        state.time_ticks
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}
