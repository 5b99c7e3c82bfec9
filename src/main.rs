//! Strictly Noughts - terminal tic-tac-toe
//!
//! Play against the rule-based computer, or run automated games.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::{SeedableRng, rngs::StdRng};
use strictly_noughts::GameConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (config_path, seed) = cli.command.settings();
    let config = GameConfig::load(config_path.map(|p| p.as_path()))?.with_seed_override(seed);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { .. } => run_play(&config),
        Command::Simulate { games, .. } => run_simulate(&config, games),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &GameConfig) -> Result<()> {
    info!(seed = ?config.seed(), "Starting interactive game");
    let mut engine = config.engine();
    strictly_noughts::play(&mut engine, std::io::stdin().lock(), std::io::stdout().lock())
}

/// Run automated games and print the final state
#[instrument(skip(config))]
fn run_simulate(config: &GameConfig, games: u32) -> Result<()> {
    info!(seed = ?config.seed(), games, "Starting simulation");
    let mut engine = config.engine();
    let mut human = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let report = strictly_noughts::simulate(&mut engine, games, &mut human)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
