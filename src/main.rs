//! Invader Sweep headless runner
//!
//! Drives the simulation with the autopilot and reports how far it got.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use invader_sweep::consts::FRAME_DT;
use invader_sweep::sim::{GameEvent, GameState, autopilot, tick};
use invader_sweep::{Tuning, TuningError};

#[derive(Debug, Parser)]
#[command(name = "invader-sweep", about = "Run the invader simulation in demo mode")]
struct Cli {
    /// JSON tuning file (missing fields use defaults)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Maximum number of ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// Seconds per tick
    #[arg(long, default_value_t = FRAME_DT)]
    dt: f32,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning, TuningError> {
    match path {
        Some(path) => Tuning::load(path),
        None => Ok(Tuning::default()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let tuning = match load_tuning(cli.tuning.as_ref()) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Invader Sweep (headless) starting...");
    let mut state = GameState::new(tuning);
    let mut kills = 0u64;

    while state.time_ticks < cli.ticks && !state.is_game_over() {
        let input = autopilot(&state);
        tick(&mut state, &input, cli.dt);
        kills += state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
            .count() as u64;
    }

    let snapshot = state.snapshot();
    if cli.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("failed to encode snapshot: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!(
        "ticks={} waves_cleared={} kills={} score={} lives={} phase={:?}",
        state.time_ticks, state.wave_index, kills, state.score, state.lives, state.phase
    );
    ExitCode::SUCCESS
}
