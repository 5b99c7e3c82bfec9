//! Core domain types for tic-tac-toe.

use super::action::BoardError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The center cell, which the computer takes when nothing more urgent applies.
pub const CENTER: usize = 5;

/// Mark placed on the board by one of the two sides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// The human player (circle).
    #[display("O")]
    Player,
    /// The computer opponent (cross).
    #[display("X")]
    Computer,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

/// Line that completed a game.
///
/// Rows are numbered top to bottom, columns left to right. `Diagonal1` runs
/// from the top-left corner, `Diagonal2` from the top-right corner.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum VictoryType {
    /// Cells 1-2-3.
    Horizontal1,
    /// Cells 4-5-6.
    Horizontal2,
    /// Cells 7-8-9.
    Horizontal3,
    /// Cells 1-4-7.
    Vertical1,
    /// Cells 2-5-8.
    Vertical2,
    /// Cells 3-6-9.
    Vertical3,
    /// Cells 1-5-9.
    Diagonal1,
    /// Cells 3-5-7.
    Diagonal2,
    /// No line completed.
    #[default]
    None,
}

impl VictoryType {
    /// Cells covered by this line, or `None` for [`VictoryType::None`].
    pub fn cells(self) -> Option<[usize; 3]> {
        match self {
            VictoryType::Horizontal1 => Some([1, 2, 3]),
            VictoryType::Horizontal2 => Some([4, 5, 6]),
            VictoryType::Horizontal3 => Some([7, 8, 9]),
            VictoryType::Vertical1 => Some([1, 4, 7]),
            VictoryType::Vertical2 => Some([2, 5, 8]),
            VictoryType::Vertical3 => Some([3, 6, 9]),
            VictoryType::Diagonal1 => Some([1, 5, 9]),
            VictoryType::Diagonal2 => Some([3, 5, 7]),
            VictoryType::None => None,
        }
    }

    /// Returns true if this is an actual line.
    pub fn is_line(self) -> bool {
        self != VictoryType::None
    }
}

/// 3x3 tic-tac-toe board addressed by cell numbers 1 through 9.
///
/// Cells are numbered in row-major order:
///
/// ```text
/// 1|2|3
/// 4|5|6
/// 7|8|9
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Builds a board holding the given marks.
    ///
    /// Later entries for an already occupied cell are ignored, as with [`Board::set`].
    #[instrument(skip(marks))]
    pub fn from_marks(marks: &[(usize, Mark)]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for &(cell, mark) in marks {
            board.set(cell, mark)?;
        }
        Ok(board)
    }

    fn slot(cell: usize) -> Result<usize, BoardError> {
        if (1..=CELL_COUNT).contains(&cell) {
            Ok(cell - 1)
        } else {
            Err(BoardError::OutOfRange(cell))
        }
    }

    /// Gets the square at the given cell (1-9).
    pub fn get(&self, cell: usize) -> Result<Square, BoardError> {
        Ok(self.squares[Self::slot(cell)?])
    }

    /// Places a mark at the given cell.
    ///
    /// Occupied cells are never overwritten; placing on one leaves the board unchanged.
    pub fn set(&mut self, cell: usize, mark: Mark) -> Result<(), BoardError> {
        let slot = Self::slot(cell)?;
        match self.squares[slot] {
            Square::Empty => self.squares[slot] = Square::Occupied(mark),
            Square::Occupied(held) => {
                debug!(cell, %held, %mark, "Cell already occupied");
            }
        }
        Ok(())
    }

    /// Checks if a cell is empty. Out-of-range cells are never empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Ok(Square::Empty))
    }

    /// Returns true if `cell` holds `mark`.
    pub fn holds(&self, cell: usize, mark: Mark) -> bool {
        matches!(self.get(cell), Ok(Square::Occupied(m)) if m == mark)
    }

    /// Cell numbers that are still empty, in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (1..=CELL_COUNT).filter(|&cell| self.is_empty(cell)).collect()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELL_COUNT];
    }

    /// Finds the empty cell that would complete a line for `mark`.
    pub fn find_completing_cell(&self, mark: Mark) -> Option<usize> {
        super::rules::find_completing_cell(self, mark)
    }

    /// Returns the first line fully held by `mark`.
    pub fn check_line(&self, mark: Mark) -> VictoryType {
        super::rules::check_line(self, mark)
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let slot = row * 3 + col;
                let symbol = match self.squares[slot] {
                    Square::Empty => (slot + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
