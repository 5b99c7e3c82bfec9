//! History consistency invariant: placements account for every occupied cell.

use super::super::{Engine, Square};
use super::Invariant;
use rand::Rng;

/// Invariant: Cells occupied at the opening plus placements equal occupied cells.
///
/// No placement is missing, no cell is filled without a placement.
pub struct HistoryConsistentInvariant;

fn occupied(squares: &[Square]) -> usize {
    squares.iter().filter(|s| **s != Square::Empty).count()
}

impl<R: Rng> Invariant<Engine<R>> for HistoryConsistentInvariant {
    fn holds(engine: &Engine<R>) -> bool {
        occupied(engine.opening().squares()) + engine.history().len()
            == occupied(engine.board().squares())
    }

    fn description() -> &'static str {
        "Placements match the number of newly occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, UserAction};

    #[test]
    fn test_empty_game_holds() {
        let engine = Engine::with_seed(11);
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_history_cleared_on_reset() {
        let mut engine = Engine::with_seed(11);
        engine.dispatch(UserAction::BoardTapped(2)).unwrap();
        assert_eq!(engine.history().len(), 2);

        engine.dispatch(UserAction::PlayAgainClicked).unwrap();
        // The computer opens the second game with the center.
        assert_eq!(engine.history().len(), 1);
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut engine = Engine::with_seed(11);
        engine.board_mut().set(9, Mark::Computer).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_dropped_placement_violates() {
        let mut engine = Engine::with_seed(11);
        engine.dispatch(UserAction::BoardTapped(2)).unwrap();
        engine.history_mut().pop();
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
