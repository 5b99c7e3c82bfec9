//! First-class action types for tic-tac-toe.
//!
//! User actions are domain events, not side effects. They carry the
//! player's intent into the engine's single dispatch entry point.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Action the presentation layer can send to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserAction {
    /// The human tapped a cell (1-9).
    BoardTapped(usize),
    /// The human asked for a new game.
    PlayAgainClicked,
}

/// Why a mark ended up in a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum PlacementReason {
    /// Chosen by the human.
    Human,
    /// Computer completed its own line.
    Win,
    /// Computer occupied the human's completing cell.
    Block,
    /// Computer took the free center.
    Center,
    /// Computer picked a random empty cell.
    Random,
}

/// A mark placed on the board during the current game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("{} -> {} ({})", mark, cell, reason)]
pub struct Placement {
    /// Cell number (1-9).
    pub cell: usize,
    /// Mark that was placed.
    pub mark: Mark,
    /// How the cell was chosen.
    pub reason: PlacementReason,
}

/// Error raised by board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Cell number is not in 1-9.
    #[display("Cell {} is out of range (must be 1-9)", _0)]
    OutOfRange(#[error(not(source))] usize),
}

/// Error raised by the game engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum EngineError {
    /// Invalid board access.
    #[display("{}", _0)]
    #[from]
    Board(BoardError),

    /// A game cannot start from a board that is already won or full.
    #[display("Position is already decided")]
    TerminalPosition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_display() {
        let placement = Placement::new(9, Mark::Computer, PlacementReason::Block);
        assert_eq!(placement.to_string(), "X -> 9 (Block)");
    }

    #[test]
    fn test_board_error_converts() {
        let err: EngineError = BoardError::OutOfRange(12).into();
        assert_eq!(err, EngineError::Board(BoardError::OutOfRange(12)));
        assert_eq!(err.to_string(), "Cell 12 is out of range (must be 1-9)");
    }
}
