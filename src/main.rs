//! Headless runner
//!
//! Plays one autoplay round at a fixed tick and logs the HUD.
//!
//! Usage: `whack-a-mole [settings.json] [seed]`

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use whack_a_mole::consts::{MAX_SUBSTEPS, SIM_DT};
use whack_a_mole::sim::{GamePhase, GameState, TickInput, tick};
use whack_a_mole::{LogPresenter, Settings, present};

/// Simulated frame time handed to the fixed-step loop
const FRAME_TIME: f32 = 1.0 / 30.0;
/// Hard stop in case a misconfigured round never ends
const MAX_FRAMES: u64 = 60 * 60 * 30;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Whack-a-Mole (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().map(PathBuf::from);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(clock_seed);

    let settings = match Settings::load_or_default(settings_path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Setup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut state = match GameState::new(settings, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Setup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Game initialized with seed: {}", seed);

    let mut presenter = LogPresenter::default();
    let mut input = TickInput {
        start: true,
        idle_mode: true,
        ..Default::default()
    };

    let mut accumulator = 0.0;
    for _ in 0..MAX_FRAMES {
        accumulator += FRAME_TIME;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input, SIM_DT);
            input.start = false;
            accumulator -= SIM_DT;
            substeps += 1;
        }
        present(&mut state, &mut presenter);

        if let GamePhase::GameOver(reason) = state.phase {
            log::info!("Final score {} ({:?})", state.score, reason);
            return ExitCode::SUCCESS;
        }
    }

    log::warn!("Round did not finish within {} frames", MAX_FRAMES);
    ExitCode::SUCCESS
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
