//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine and the computer heuristic share them.

pub mod complete;
pub mod draw;
pub mod win;

pub use complete::find_completing_cell;
pub use draw::is_full;
pub use win::check_line;
