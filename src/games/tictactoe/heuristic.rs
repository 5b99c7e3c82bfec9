//! Rule-based move selection for the computer opponent.
//!
//! The computer does not search the game tree. Each turn it walks a fixed
//! priority chain and stops at the first rule that yields a cell:
//!
//! 1. complete one of its own lines,
//! 2. block a line the human could complete,
//! 3. take the center,
//! 4. pick a random empty cell.
//!
//! Only one threat is handled per turn, so a human who opens two lines at
//! once can beat it.

use super::{Board, CELL_COUNT, CENTER, Mark, PlacementReason};
use rand::Rng;
use tracing::{debug, instrument};

/// Chooses the computer's next cell.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng>(
    board: &Board,
    rng: &mut R,
) -> Option<(usize, PlacementReason)> {
    if let Some(cell) = board.find_completing_cell(Mark::Computer) {
        debug!(cell, "Completing own line");
        return Some((cell, PlacementReason::Win));
    }

    if let Some(cell) = board.find_completing_cell(Mark::Player) {
        debug!(cell, "Blocking human line");
        return Some((cell, PlacementReason::Block));
    }

    if board.is_empty(CENTER) {
        debug!("Taking center");
        return Some((CENTER, PlacementReason::Center));
    }

    random_empty_cell(board, rng).map(|cell| (cell, PlacementReason::Random))
}

/// Samples cells uniformly until an empty one turns up.
fn random_empty_cell<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    if board.is_full() {
        return None;
    }

    loop {
        let cell = rng.random_range(1..=CELL_COUNT);
        if board.is_empty(cell) {
            debug!(cell, "Picked random cell");
            return Some(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn board(marks: &[(usize, Mark)]) -> Board {
        Board::from_marks(marks).unwrap()
    }

    #[test]
    fn test_win_beats_block() {
        let mut rng = StdRng::seed_from_u64(42);
        // Computer can finish column 3; human can finish column 1.
        let board = board(&[
            (3, Mark::Computer),
            (6, Mark::Computer),
            (4, Mark::Player),
            (5, Mark::Player),
            (1, Mark::Player),
        ]);
        assert_eq!(choose_move(&board, &mut rng), Some((9, PlacementReason::Win)));
    }

    #[test]
    fn test_blocks_human() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = board(&[(1, Mark::Player), (2, Mark::Player), (5, Mark::Computer)]);
        assert_eq!(choose_move(&board, &mut rng), Some((3, PlacementReason::Block)));
    }

    #[test]
    fn test_takes_center() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = board(&[(1, Mark::Player)]);
        assert_eq!(choose_move(&board, &mut rng), Some((CENTER, PlacementReason::Center)));
    }

    #[test]
    fn test_random_fallback_picks_empty_cell() {
        let board = board(&[(5, Mark::Player)]);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (cell, reason) = choose_move(&board, &mut rng).unwrap();
            assert_eq!(reason, PlacementReason::Random);
            assert!(board.is_empty(cell));
        }
    }

    #[test]
    fn test_random_fallback_finds_last_cell() {
        // Only cell 7 is free.
        let board = board(&[
            (1, Mark::Player),
            (2, Mark::Computer),
            (3, Mark::Player),
            (4, Mark::Computer),
            (5, Mark::Player),
            (6, Mark::Computer),
            (8, Mark::Player),
            (9, Mark::Computer),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_empty_cell(&board, &mut rng), Some(7));
    }

    #[test]
    fn test_full_board_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let marks: Vec<_> = (1..=CELL_COUNT).map(|cell| (cell, Mark::Player)).collect();
        assert_eq!(choose_move(&board(&marks), &mut rng), None);
    }
}
