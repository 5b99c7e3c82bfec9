//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Engine, Square};
use super::Invariant;
use rand::Rng;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the game's placements onto its opening board must fill only
/// empty cells and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl MonotonicBoardInvariant {
    fn replay<R: Rng>(engine: &Engine<R>) -> Option<Board> {
        let mut reconstructed = engine.opening().clone();

        for placement in engine.history() {
            if reconstructed.get(placement.cell).ok()? != Square::Empty {
                return None;
            }
            reconstructed.set(placement.cell, placement.mark).ok()?;
        }

        Some(reconstructed)
    }
}

impl<R: Rng> Invariant<Engine<R>> for MonotonicBoardInvariant {
    fn holds(engine: &Engine<R>) -> bool {
        Self::replay(engine).is_some_and(|board| board == *engine.board())
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
