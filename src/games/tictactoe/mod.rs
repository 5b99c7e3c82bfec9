mod action;
mod game;
mod heuristic;
mod invariants;
mod rules;
mod types;

pub use action::{BoardError, EngineError, Placement, PlacementReason, UserAction};
pub use game::{Engine, GameState, GameStatus};
pub use heuristic::choose_move;
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant, OutcomeConsistentInvariant,
};
pub use types::{Board, CELL_COUNT, CENTER, Mark, Square, VictoryType};
