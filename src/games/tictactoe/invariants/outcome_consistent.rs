//! Outcome consistency invariant: published state agrees with the status.

use super::super::{Engine, GameStatus, VictoryType};
use super::Invariant;
use rand::Rng;

/// Invariant: The published state mirrors the engine status.
///
/// `has_won` is set exactly when a line was completed, the victory type is
/// only reported for a win, and the side to move is published only while
/// the game is in progress.
pub struct OutcomeConsistentInvariant;

impl<R: Rng> Invariant<Engine<R>> for OutcomeConsistentInvariant {
    fn holds(engine: &Engine<R>) -> bool {
        let state = engine.state();
        match engine.status() {
            GameStatus::InProgress(to_move) => {
                !*state.has_won()
                    && *state.victory_type() == VictoryType::None
                    && *state.current_turn() == Some(to_move)
            }
            GameStatus::Won { winner, victory } => {
                *state.has_won()
                    && *state.victory_type() == victory
                    && victory.is_line()
                    && engine.board().check_line(winner) == victory
                    && state.current_turn().is_none()
            }
            GameStatus::Draw => {
                !*state.has_won()
                    && *state.victory_type() == VictoryType::None
                    && engine.board().is_full()
                    && state.current_turn().is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Published state agrees with the game status"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Mark, UserAction};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_in_progress_holds() {
        let engine = Engine::with_seed(17);
        assert!(OutcomeConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_won_holds() {
        let board = Board::from_marks(&[(1, Mark::Player), (2, Mark::Player)]).unwrap();
        let mut engine =
            Engine::from_position(board, Mark::Player, StdRng::seed_from_u64(17)).unwrap();
        engine.dispatch(UserAction::BoardTapped(3)).unwrap();
        assert!(engine.status().is_over());
        assert!(OutcomeConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_win_flag_during_play_violates() {
        let mut engine = Engine::with_seed(17);
        engine.set_has_won(true);
        assert!(!OutcomeConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_cleared_win_flag_violates() {
        let board = Board::from_marks(&[(1, Mark::Player), (2, Mark::Player)]).unwrap();
        let mut engine =
            Engine::from_position(board, Mark::Player, StdRng::seed_from_u64(17)).unwrap();
        engine.dispatch(UserAction::BoardTapped(3)).unwrap();
        engine.set_has_won(false);
        assert!(!OutcomeConsistentInvariant::holds(&engine));
    }
}
