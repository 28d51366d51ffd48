//! Terminal-state and outcome detection.

use super::win::winner;
use crate::{Board, Cell, Outcome};
use tracing::instrument;

/// Checks if every cell is occupied.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().all(|cell| *cell != Cell::Empty)
}

/// True iff someone has won or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Derives the game outcome from the board.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(mark) => Outcome::won_by(mark),
        None if is_full(board) => Outcome::Tie,
        None => Outcome::InProgress,
    }
}
