//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no completed line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, VictoryType};
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board)
            && board.check_line(Mark::Player) == VictoryType::None
            && board.check_line(Mark::Computer) == VictoryType::None
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_marks(&[(5, Mark::Computer)]).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // O X O / O X X / X O O
        let board = Board::from_marks(&[
            (1, Mark::Player),
            (2, Mark::Computer),
            (3, Mark::Player),
            (4, Mark::Player),
            (5, Mark::Computer),
            (6, Mark::Computer),
            (7, Mark::Computer),
            (8, Mark::Player),
            (9, Mark::Player),
        ])
        .unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_line_completed() {
        let board = Board::from_marks(&[
            (1, Mark::Computer),
            (2, Mark::Computer),
            (3, Mark::Computer),
            (4, Mark::Player),
            (5, Mark::Player),
            (6, Mark::Computer),
            (7, Mark::Player),
            (8, Mark::Computer),
            (9, Mark::Player),
        ])
        .unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
