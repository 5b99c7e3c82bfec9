//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, VictoryType};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns the first line fully held by `mark`.
///
/// Lines are scanned rows first, then columns, then diagonals.
/// Returns [`VictoryType::None`] when `mark` holds no complete line.
#[instrument(skip(board))]
pub fn check_line(board: &Board, mark: Mark) -> VictoryType {
    VictoryType::iter()
        .find(|line| {
            line.cells()
                .is_some_and(|cells| cells.iter().all(|&cell| board.holds(cell, mark)))
        })
        .unwrap_or(VictoryType::None)
}
