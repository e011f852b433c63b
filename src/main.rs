//! Particle Arena entry point
//!
//! Headless driver: seeds a population from a config, runs a fixed number of
//! ticks, and logs aggregate collision statistics.
//!
//! Usage: `particle-arena [TICKS] [SEED]` or `particle-arena --config FILE
//! [TICKS]`. With no seed, one is taken from the system clock.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use particle_arena::config::SimConfig;
use particle_arena::sim::{SimState, TickStats, tick};

const DEFAULT_TICKS: u64 = 600;

struct RunOptions {
    ticks: u64,
    config: SimConfig,
}

fn parse_args() -> Result<RunOptions, String> {
    let mut args = std::env::args().skip(1).peekable();
    let mut config = SimConfig::default();
    let mut seed_from_args = false;

    if args.peek().map(String::as_str) == Some("--config") {
        args.next();
        let path = args.next().ok_or("--config requires a file path")?;
        let text = std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
        config = serde_json::from_str(&text).map_err(|e| format!("{path}: {e}"))?;
        seed_from_args = true; // config file owns the seed
    }

    let ticks = match args.next() {
        Some(raw) => raw.parse().map_err(|_| format!("invalid tick count: {raw}"))?,
        None => DEFAULT_TICKS,
    };

    if let Some(raw) = args.next() {
        config.seed = raw.parse().map_err(|_| format!("invalid seed: {raw}"))?;
        seed_from_args = true;
    }

    if !seed_from_args {
        config.seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
    }

    Ok(RunOptions { ticks, config })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(err) => {
            log::error!("{err}");
            eprintln!("usage: particle-arena [--config FILE] [TICKS] [SEED]");
            return ExitCode::FAILURE;
        }
    };

    let config = options.config;
    if let Err(err) = config.validate() {
        log::error!("invalid config: {err}");
        return ExitCode::FAILURE;
    }

    let arena = config.arena();
    let mut state = SimState::new(config.seed);
    state.populate(arena, &config);

    let mut totals = TickStats::default();
    for _ in 0..options.ticks {
        totals.accumulate(tick(&mut state, arena));
    }

    log::info!(
        "Ran {} ticks: {} wall bounces, {} pair collisions, {} bodies live",
        options.ticks,
        totals.wall_bounces,
        totals.collisions,
        state.live_count()
    );

    ExitCode::SUCCESS
}
