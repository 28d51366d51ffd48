//! Exhaustive minimax search.
//!
//! X maximises and O minimises a terminal value of +1 (X won), -1 (O won)
//! or 0 (tie). The whole tree is at most nine plies deep, so the search
//! walks every line of play with no pruning and no transposition table.
//!
//! When several moves share the optimal value the choice is fixed: X takes
//! the greatest `(value, move)` pair and O the smallest, so X prefers the
//! lexicographically last of its best moves and O the first.

use crate::error::NoMoveAvailableError;
use crate::{Board, Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a position from X's point of view.
pub type Value = i8;

/// A legal move together with the minimax value of the board it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The move.
    pub mv: Move,
    /// Value of the resulting board under perfect play.
    pub value: Value,
}

/// Value of a finished game: +1 if X won, -1 if O won, 0 otherwise.
pub fn utility(board: &Board) -> Value {
    match board.winner() {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}

/// Exact minimax value of `board`, terminal or not.
pub fn value(board: &Board) -> Value {
    if board.is_terminal() {
        return utility(board);
    }
    match board.active_player() {
        Mark::X => max_value(board),
        Mark::O => min_value(board),
    }
}

/// Every legal move with its value, in row-major order.
///
/// # Errors
///
/// Returns [`NoMoveAvailableError`] if the game is already over.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn scored_moves(board: &Board) -> Result<Vec<ScoredMove>, NoMoveAvailableError> {
    if board.is_terminal() {
        return Err(NoMoveAvailableError);
    }
    Ok(board
        .successors()
        .map(|(mv, next)| ScoredMove {
            mv,
            value: value(&next),
        })
        .collect())
}

/// Optimal move for the active player.
///
/// # Errors
///
/// Returns [`NoMoveAvailableError`] if the game is already over.
#[instrument(skip(board), fields(board = %board, player = %board.active_player()))]
pub fn best_move(board: &Board) -> Result<Move, NoMoveAvailableError> {
    let scored = scored_moves(board)?;
    let key = |s: &&ScoredMove| (s.value, s.mv);
    let best = match board.active_player() {
        Mark::X => scored.iter().max_by_key(key),
        Mark::O => scored.iter().min_by_key(key),
    }
    .ok_or(NoMoveAvailableError)?;

    debug!(mv = %best.mv, value = best.value, "Search complete");
    Ok(best.mv)
}

fn max_value(board: &Board) -> Value {
    if board.is_terminal() {
        return utility(board);
    }
    board
        .successors()
        .map(|(_, next)| min_value(&next))
        .max()
        .unwrap_or_else(|| utility(board))
}

fn min_value(board: &Board) -> Value {
    if board.is_terminal() {
        return utility(board);
    }
    board
        .successors()
        .map(|(_, next)| max_value(&next))
        .min()
        .unwrap_or_else(|| utility(board))
}
