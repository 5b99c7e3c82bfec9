//! Strictly Noughts library - tic-tac-toe against a rule-based computer
//!
//! The engine owns the board, turn order and score. A presentation layer
//! sends it [`UserAction`]s and renders the [`GameState`] it publishes.
//!
//! # Architecture
//!
//! - **Board**: 9-cell grid with line detection and line-completion search
//! - **Engine**: action dispatch, win/draw bookkeeping, alternating openers
//! - **Heuristic**: computer move selection (win, block, center, random)
//! - **Console**: line-oriented terminal front end
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{Engine, Mark, UserAction};
//!
//! # fn example() -> Result<(), strictly_noughts::EngineError> {
//! let mut engine = Engine::with_seed(7);
//! engine.dispatch(UserAction::BoardTapped(1))?;
//!
//! // The computer has already replied by taking the center
//! assert!(engine.board().holds(5, Mark::Computer));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Console front end
pub use console::{ConsoleCommand, SimulationReport, play, render, simulate};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoardError, CELL_COUNT, CENTER, Engine, EngineError,
    EngineInvariants, GameState, GameStatus, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, Mark, MonotonicBoardInvariant, OutcomeConsistentInvariant, Placement,
    PlacementReason, Square, UserAction, VictoryType, choose_move,
};
