//! Move coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// A move: the `(row, col)` of the cell to mark.
///
/// Moves order lexicographically by row, then column. Coordinates are always
/// in `0..3`; [`Move::new`] panics otherwise, so every `Move` in circulation
/// addresses a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Creates a move.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..3`.
    #[track_caller]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < SIZE && col < SIZE,
            "move ({row}, {col}) is off the 3x3 board"
        );
        Self { row, col }
    }

    /// Creates a move, returning `None` for out-of-range coordinates.
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::try_new(index / SIZE, index % SIZE)
    }

    /// Row-major index (0-8) of this move.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Row of the target cell.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of the target cell.
    pub fn col(self) -> usize {
        self.col
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..SIZE * SIZE).map(|i| Move {
            row: i / SIZE,
            col: i % SIZE,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
