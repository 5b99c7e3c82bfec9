//! Command-line interface for strictly_noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Noughts - tic-tac-toe against a rule-based computer
#[derive(Parser, Debug)]
#[command(name = "strictly_noughts")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to config file (defaults to strictly_noughts.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the computer's random moves (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play automated games with a random human and print the final state as JSON
    Simulate {
        /// Path to config file (defaults to strictly_noughts.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for both sides' random moves (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,
    },
}

impl Command {
    /// Config path and seed override shared by every command.
    pub fn settings(&self) -> (Option<&PathBuf>, Option<u64>) {
        match self {
            Command::Play { config, seed } | Command::Simulate { config, seed, .. } => {
                (config.as_ref(), *seed)
            }
        }
    }
}
