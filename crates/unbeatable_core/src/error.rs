//! Error types for the board model and search.

use crate::action::Move;
use derive_more::{Display, Error};

/// A move targeted a cell that is already occupied.
///
/// Recoverable: the caller discards the attempted move. The board the move
/// was applied to is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Illegal move: cell {} is already occupied", mv)]
pub struct IllegalMoveError {
    /// The rejected move.
    pub mv: Move,
}

/// Search was asked for a move on a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No move available: the game is already over")]
pub struct NoMoveAvailableError;

/// Board text could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The text did not hold exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),

    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board text", _0)]
    InvalidCell(#[error(not(source))] char),
}
