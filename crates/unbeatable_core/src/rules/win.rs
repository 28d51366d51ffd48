//! Win detection.

use crate::{Board, Mark, Move};

/// Every line of three, in scan order: rows top to bottom, columns left to
/// right, the main diagonal, then the anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Returns the mark on the first completed line in [`LINES`] order.
///
/// Returns `None` when no line holds three equal marks.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|(row, col)| board.get(Move::new(row, col)).mark());
        match (a, b, c) {
            (Some(a), Some(b), Some(c)) if a == b && b == c => Some(a),
            _ => None,
        }
    })
}
