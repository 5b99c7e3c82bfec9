//! Line-oriented terminal front end for the engine.
//!
//! The engine itself has no I/O; this module turns typed commands into
//! [`UserAction`]s and prints the board after each one.

use crate::games::tictactoe::{Engine, EngineError, GameState, UserAction};
use anyhow::Result;
use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Commands: 1-9 to play a cell, 'a' to play again, 'q' to quit";

/// A parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Forward an action to the engine.
    Action(UserAction),
    /// Leave the game.
    Quit,
    /// Print usage.
    Help,
}

impl ConsoleCommand {
    /// Parses one line of input. Unrecognised input maps to [`ConsoleCommand::Help`].
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();
        if let Ok(cell) = line.parse::<usize>() {
            return ConsoleCommand::Action(UserAction::BoardTapped(cell));
        }
        match line.as_str() {
            "a" | "again" => ConsoleCommand::Action(UserAction::PlayAgainClicked),
            "q" | "quit" | "exit" => ConsoleCommand::Quit,
            _ => ConsoleCommand::Help,
        }
    }
}

/// Formats the board, the hint line and the score.
pub fn render<R: Rng>(engine: &Engine<R>) -> String {
    let state = engine.state();
    format!(
        "{}\n\n{}\nO: {}  X: {}  Draw: {}\n",
        engine.board().display(),
        state.hint_text(),
        state.player_win_count(),
        state.computer_win_count(),
        state.draw_count(),
    )
}

/// Runs an interactive game until `quit` or end of input.
#[instrument(skip_all)]
pub fn play<R: Rng>(
    engine: &mut Engine<R>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    writeln!(output, "{}\n", HELP)?;
    writeln!(output, "{}", render(engine))?;

    for line in input.lines() {
        match ConsoleCommand::parse(&line?) {
            ConsoleCommand::Action(action) => match engine.dispatch(action) {
                Ok(()) => writeln!(output, "{}", render(engine))?,
                Err(e) => {
                    warn!(error = %e, "Rejected input");
                    writeln!(output, "{}", e)?;
                }
            },
            ConsoleCommand::Quit => {
                debug!("Quit requested");
                break;
            }
            ConsoleCommand::Help => writeln!(output, "{}", HELP)?,
        }
    }

    info!(state = ?engine.state(), "Session finished");
    Ok(())
}

/// Outcome of an automated run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Number of games played.
    pub games: u32,
    /// Engine state after the last game.
    pub state: GameState,
}

/// Plays `games` games where the human side taps random empty cells.
///
/// Play Again is pressed between games, so openers alternate.
#[instrument(skip(engine, human))]
pub fn simulate<R: Rng, H: Rng>(
    engine: &mut Engine<R>,
    games: u32,
    human: &mut H,
) -> Result<SimulationReport, EngineError> {
    for game in 0..games {
        if game > 0 {
            engine.dispatch(UserAction::PlayAgainClicked)?;
        }

        while !engine.status().is_over() {
            let Some(&cell) = engine.board().empty_cells().choose(human) else {
                break;
            };
            engine.dispatch(UserAction::BoardTapped(cell))?;
        }
        debug!(game, status = ?engine.status(), "Game finished");
    }

    Ok(SimulationReport {
        games,
        state: engine.state().clone(),
    })
}
