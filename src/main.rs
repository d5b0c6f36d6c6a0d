//! Hookle entry point
//!
//! Headless native binary: runs a scripted session against a level file (or
//! the built-in level) and logs the events a presentation layer would
//! consume. Useful as a smoke test and as a reference for how to drive the
//! sim from a real frontend.

use std::path::Path;

use glam::Vec2;

use hookle::consts::{MAX_SUBSTEPS, SIM_DT};
use hookle::persistence;
use hookle::sim::{GameState, LevelData, TickInput, tick};
use hookle::tuning::Tuning;

fn main() {
    env_logger::init();
    log::info!("Hookle (headless) starting");

    let tuning = Tuning::default();
    let level = match std::env::args().nth(1) {
        Some(path) => match persistence::load_level(Path::new(&path)) {
            Ok(level) => {
                log::info!("Loaded level from {path}");
                level
            }
            Err(err) => {
                log::warn!("Could not load {path}: {err}; using the built-in level");
                LevelData::default_level()
            }
        },
        None => LevelData::default_level(),
    };

    let mut state = GameState::from_level(&level);
    let mut accumulator = 0.0f32;

    // Scripted session: run right, jump, grapple, pump the swing, release.
    // Headless frames arrive at the fixed rate, so the accumulator normally
    // yields one substep per frame; the cap guards against drift.
    for frame in 0u32..600 {
        let mut input = TickInput::default();
        match frame {
            0..=119 => input.move_dir = 1,
            120 => {
                input.move_dir = 1;
                input.jump = true;
            }
            121..=179 => input.move_dir = 1,
            180 => input.fire_at = Some(Vec2::new(760.0, 150.0)),
            181..=359 => input.move_dir = 1,
            360 => input.release = true,
            _ => {}
        }

        accumulator += SIM_DT;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input, &tuning, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.jump = false;
            input.fire_at = None;
            input.release = false;
            input.reset = false;

            for event in &state.events {
                log::info!("frame {frame}: {event:?}");
            }
        }
    }

    let player = &state.player;
    log::info!(
        "session done after {} ticks: position ({:.1}, {:.1}), grounded: {}",
        state.time_ticks,
        player.position.x,
        player.position.y,
        player.can_jump
    );
}
