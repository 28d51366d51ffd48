//! The 3x3 board value.

use crate::action::{Move, SIZE};
use crate::error::{IllegalMoveError, ParseBoardError};
use crate::rules;
use crate::types::{Cell, Mark, Outcome};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Boards are plain `Copy` values. Nothing mutates a board in place:
/// [`Board::apply`] returns a fresh board and leaves the receiver as it was,
/// which is what lets the search walk the game tree without aliasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Cell contents at `mv`.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    /// Checks if the cell at `mv` is empty.
    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// All cells, indexed `[row][col]`.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Marked(mark))
            .count()
    }

    /// Mark that moves next.
    ///
    /// Derived from the mark counts alone: O when X has placed more marks,
    /// X otherwise. X therefore opens every game.
    pub fn active_player(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Every empty cell in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::all().filter(|mv| self.is_empty_at(*mv)).collect()
    }

    /// Places the active player's mark at `mv` on a copy of this board.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] if the cell is occupied. No board is
    /// produced in that case.
    #[instrument(level = "debug", skip(self, mv), fields(board = %self, mv = %mv))]
    pub fn apply(&self, mv: Move) -> Result<Board, IllegalMoveError> {
        if !self.is_empty_at(mv) {
            debug!("Rejected move onto occupied cell");
            return Err(IllegalMoveError { mv });
        }
        Ok(self.with_mark(mv, self.active_player()))
    }

    /// Boards reachable in one move, paired with the move, in row-major
    /// order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        let mark = self.active_player();
        Move::all()
            .filter(|mv| self.is_empty_at(*mv))
            .map(move |mv| (mv, self.with_mark(mv, mark)))
    }

    /// Mark on the first completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True once the game is won or the board is full.
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    /// Outcome of the game on this board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(self)
    }

    fn with_mark(&self, mv: Move, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[mv.row()][mv.col()] = Cell::Marked(mark);
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (either case) are marks; `.`, `_` and `-` are empty cells.
    /// Whitespace, `/`, `|` and `,` are separators and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '/' | '|' | ','))
            .map(|c| match c {
                'X' | 'x' => Ok(Cell::Marked(Mark::X)),
                'O' | 'o' => Ok(Cell::Marked(Mark::O)),
                '.' | '_' | '-' => Ok(Cell::Empty),
                other => Err(ParseBoardError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != SIZE * SIZE {
            return Err(ParseBoardError::WrongCellCount(cells.len()));
        }

        let mut board = Board::default();
        for (mv, cell) in Move::all().zip(cells) {
            board.cells[mv.row()][mv.col()] = cell;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_is_empty() {
        let board = Board::initial();
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.count(Mark::X), 0);
        assert_eq!(board.count(Mark::O), 0);
        assert_eq!(board.active_player(), Mark::X);
    }

    #[test]
    fn test_apply_leaves_receiver_untouched() {
        let before = Board::initial();
        let after = before.apply(Move::new(1, 1)).expect("empty cell");
        assert_eq!(before, Board::initial());
        assert_eq!(after.get(Move::new(1, 1)), Cell::Marked(Mark::X));
        assert_eq!(after.active_player(), Mark::O);
    }

    #[test]
    fn test_apply_rejects_occupied_cell() {
        let board = Board::initial().apply(Move::new(0, 0)).expect("empty cell");
        let err = board.apply(Move::new(0, 0)).unwrap_err();
        assert_eq!(err.mv, Move::new(0, 0));
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn test_active_player_uses_counts_only() {
        // Two O marks and one X: counts decide, X to move.
        let board: Board = "O../.X./..O".parse().expect("valid");
        assert_eq!(board.active_player(), Mark::X);
    }

    #[test]
    fn test_successors_match_legal_moves() {
        let board: Board = "XX./OO./...".parse().expect("valid");
        let moves: Vec<Move> = board.successors().map(|(mv, _)| mv).collect();
        assert_eq!(moves, board.legal_moves());
        for (mv, next) in board.successors() {
            assert_eq!(next, board.apply(mv).expect("legal"));
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let board: Board = "x o x | . o . | _ - x".parse().expect("valid");
        assert_eq!(board.to_string(), "XOX/.O./..X");
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XX./OO./..".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(8))
        );
        assert_eq!(
            "XX./OZ./...".parse::<Board>(),
            Err(ParseBoardError::InvalidCell('Z'))
        );
    }
}
