//! Position analysis reported by the `best-move` command.

use serde::Serialize;
use std::fmt;
use tracing::instrument;
use unbeatable_core::search::{self, ScoredMove, Value};
use unbeatable_core::{Board, Mark, Move, NoMoveAvailableError};

/// Optimal move for a board, with optional per-move values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Board as given, in canonical text form.
    pub board: String,
    /// Mark to move.
    pub to_move: Mark,
    /// Chosen move.
    pub best_move: Move,
    /// Minimax value of the board (+1 X wins, -1 O wins, 0 tie).
    pub value: Value,
    /// Every legal move and its value, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<Vec<ScoredMove>>,
}

/// Analyses `board`, listing every move's value when `all` is set.
///
/// # Errors
///
/// Returns [`NoMoveAvailableError`] if the game is already over.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, all: bool) -> Result<Analysis, NoMoveAvailableError> {
    let best_move = search::best_move(board)?;
    let moves = if all {
        Some(search::scored_moves(board)?)
    } else {
        None
    };
    Ok(Analysis {
        board: board.to_string(),
        to_move: board.active_player(),
        best_move,
        value: search::value(board),
        moves,
    })
}

/// Describes a value from X's perspective in words.
pub fn describe(value: Value) -> &'static str {
    match value.signum() {
        1 => "X wins",
        -1 => "O wins",
        _ => "tie",
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:     {}", self.board)?;
        writeln!(f, "To move:   {}", self.to_move)?;
        writeln!(f, "Best move: {}", self.best_move)?;
        write!(f, "Value:     {} ({})", self.value, describe(self.value))?;
        if let Some(moves) = &self.moves {
            for scored in moves {
                write!(
                    f,
                    "\n  {} -> {:+} ({})",
                    scored.mv,
                    scored.value,
                    describe(scored.value)
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_immediate_win() {
        let board: Board = "XX./OO./...".parse().expect("valid");
        let analysis = analyze(&board, false).expect("game in progress");
        assert_eq!(analysis.best_move, Move::new(0, 2));
        assert_eq!(analysis.value, 1);
        assert_eq!(analysis.to_move, Mark::X);
        assert!(analysis.moves.is_none());
    }

    #[test]
    fn test_analyze_all_lists_legal_moves() {
        let board: Board = "XOX/XOO/OX.".parse().expect("valid");
        let analysis = analyze(&board, true).expect("game in progress");
        let moves = analysis.moves.expect("requested");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].mv, Move::new(2, 2));
        assert_eq!(moves[0].value, 0);
    }

    #[test]
    fn test_analyze_finished_game() {
        let board: Board = "XXX/OO./...".parse().expect("valid");
        assert_eq!(analyze(&board, false), Err(NoMoveAvailableError));
    }

    #[test]
    fn test_text_report() {
        let board: Board = "XX./OO./...".parse().expect("valid");
        let text = analyze(&board, false).expect("game in progress").to_string();
        assert!(text.contains("Best move: (0, 2)"));
        assert!(text.contains("Value:     1 (X wins)"));
    }
}
