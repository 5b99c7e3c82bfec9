//! Alternating turn invariant: the two sides take turns.

use super::super::{Engine, GameStatus};
use super::Invariant;
use rand::Rng;

/// Invariant: Placements alternate between the sides.
///
/// The opener places first, then the marks alternate. While the game is in
/// progress the side to move is the one that did not place last.
pub struct AlternatingTurnInvariant;

impl<R: Rng> Invariant<Engine<R>> for AlternatingTurnInvariant {
    fn holds(engine: &Engine<R>) -> bool {
        let history = engine.history();

        if let Some(first) = history.first()
            && first.mark != engine.starting_turn()
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        match engine.status() {
            GameStatus::InProgress(to_move) => {
                let expected = history
                    .last()
                    .map_or(engine.starting_turn(), |last| last.mark.opponent());
                to_move == expected
            }
            GameStatus::Won { .. } | GameStatus::Draw => true,
        }
    }

    fn description() -> &'static str {
        "Sides alternate, starting with the opener"
    }
}
