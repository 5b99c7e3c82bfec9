//! Line-completion search used by the computer opponent.

use super::super::{Board, Mark};
use tracing::instrument;

/// For each target cell, the cell pairs that complete a line through it.
///
/// Targets are listed in ascending cell order. The first empty target with a
/// matching pair wins, so this order decides which cell is chosen when several
/// lines can be completed at once.
const COMPLETIONS: [(usize, &[[usize; 2]]); 9] = [
    (1, &[[2, 3], [5, 9], [4, 7]]),
    (2, &[[1, 3], [5, 8]]),
    (3, &[[1, 2], [5, 7], [6, 9]]),
    (4, &[[1, 7], [5, 6]]),
    (5, &[[2, 8], [4, 6], [1, 9], [3, 7]]),
    (6, &[[3, 9], [4, 5]]),
    (7, &[[1, 4], [3, 5], [8, 9]]),
    (8, &[[7, 9], [2, 5]]),
    (9, &[[1, 5], [3, 6], [7, 8]]),
];

/// Finds an empty cell that completes a line of `mark`.
///
/// A cell qualifies when it is empty and the other two cells of some line
/// through it both hold `mark`. Returns the lowest-numbered qualifying cell.
#[instrument(skip(board))]
pub fn find_completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    COMPLETIONS
        .iter()
        .find(|(target, pairs)| {
            board.is_empty(*target)
                && pairs
                    .iter()
                    .any(|&[a, b]| board.holds(a, mark) && board.holds(b, mark))
        })
        .map(|&(target, _)| target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_completion() {
        assert_eq!(find_completing_cell(&Board::new(), Mark::Player), None);
    }

    #[test]
    fn test_completes_row() {
        let board = Board::from_marks(&[(1, Mark::Player), (2, Mark::Player)]).unwrap();
        assert_eq!(find_completing_cell(&board, Mark::Player), Some(3));
        assert_eq!(find_completing_cell(&board, Mark::Computer), None);
    }

    #[test]
    fn test_completes_gap_in_middle() {
        let board = Board::from_marks(&[(3, Mark::Computer), (7, Mark::Computer)]).unwrap();
        assert_eq!(find_completing_cell(&board, Mark::Computer), Some(5));
    }

    #[test]
    fn test_blocked_line_is_ignored() {
        let board = Board::from_marks(&[
            (1, Mark::Player),
            (2, Mark::Player),
            (3, Mark::Computer),
        ])
        .unwrap();
        assert_eq!(find_completing_cell(&board, Mark::Player), None);
    }

    #[test]
    fn test_lowest_target_wins_tie() {
        // Both 3 (row 1) and 7 (column 1) complete a line; 3 is scanned first.
        let board = Board::from_marks(&[
            (1, Mark::Player),
            (2, Mark::Player),
            (4, Mark::Player),
        ])
        .unwrap();
        assert_eq!(find_completing_cell(&board, Mark::Player), Some(3));
    }

    #[test]
    fn test_every_pair_is_a_real_line() {
        let lines: Vec<[usize; 3]> = <crate::VictoryType as strum::IntoEnumIterator>::iter()
            .filter_map(|line| line.cells())
            .collect();
        for (target, pairs) in COMPLETIONS {
            for &[a, b] in pairs {
                let mut cells = [target, a, b];
                cells.sort_unstable();
                assert!(lines.contains(&cells), "{:?} is not a line", cells);
            }
        }
    }
}
