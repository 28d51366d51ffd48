//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unbeatable_core::{Mark, Move, SIZE};

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
/// Width of a button, borders included.
pub const BUTTON_WIDTH: u16 = 15;
/// Height of a button, borders included.
pub const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 4;

/// Rectangles for every widget on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// The 3x3 grid, indexed `[row][col]`.
    pub cells: [[Rect; SIZE]; SIZE],
    /// "Play as X" and "Play as O" buttons.
    pub mark_buttons: [Rect; 2],
    /// "Play Again" button.
    pub again_button: Rect,
    /// Status bar.
    pub status: Rect,
}

impl ScreenLayout {
    /// Lays the screen out inside `area`.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                         // Title
                Constraint::Min(SIZE as u16 * CELL_HEIGHT),    // Board
                Constraint::Length(BUTTON_HEIGHT),             // Play again
                Constraint::Length(3),                         // Status
            ])
            .split(area);

        let board = center_rect(chunks[1], SIZE as u16 * CELL_WIDTH, SIZE as u16 * CELL_HEIGHT);
        let mut cells = [[Rect::default(); SIZE]; SIZE];
        for (row, cells_row) in cells.iter_mut().enumerate() {
            for (col, cell) in cells_row.iter_mut().enumerate() {
                *cell = Rect::new(
                    board.x + col as u16 * CELL_WIDTH,
                    board.y + row as u16 * CELL_HEIGHT,
                    CELL_WIDTH,
                    CELL_HEIGHT,
                )
                .intersection(board);
            }
        }

        let buttons = center_rect(chunks[1], 2 * BUTTON_WIDTH + BUTTON_GAP, BUTTON_HEIGHT);
        let mark_buttons = [
            Rect::new(buttons.x, buttons.y, BUTTON_WIDTH, BUTTON_HEIGHT).intersection(buttons),
            Rect::new(
                buttons.x + BUTTON_WIDTH + BUTTON_GAP,
                buttons.y,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            )
            .intersection(buttons),
        ];

        Self {
            title: chunks[0],
            cells,
            mark_buttons,
            again_button: center_rect(chunks[2], BUTTON_WIDTH, BUTTON_HEIGHT),
            status: chunks[3],
        }
    }

    /// Board cell under the terminal position `(column, row)`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Move> {
        let pos = Position::new(column, row);
        Move::all().find(|mv| self.cells[mv.row()][mv.col()].contains(pos))
    }

    /// Mark whose selection button is under `(column, row)`.
    pub fn mark_button_at(&self, column: u16, row: u16) -> Option<Mark> {
        let pos = Position::new(column, row);
        if self.mark_buttons[0].contains(pos) {
            Some(Mark::X)
        } else if self.mark_buttons[1].contains(pos) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Checks if `(column, row)` is on the "Play Again" button.
    pub fn again_button_at(&self, column: u16, row: u16) -> bool {
        self.again_button.contains(Position::new(column, row))
    }

    /// Selection button for `mark`.
    pub fn mark_button(&self, mark: Mark) -> Rect {
        match mark {
            Mark::X => self.mark_buttons[0],
            Mark::O => self.mark_buttons[1],
        }
    }
}

/// Centres a `width` x `height` rectangle in `area`, clipped to it.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_cell_centres_map_back_to_moves() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24));
        for mv in Move::all() {
            let (x, y) = center(layout.cells[mv.row()][mv.col()]);
            assert_eq!(layout.cell_at(x, y), Some(mv));
        }
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24));
        for a in Move::all() {
            for b in Move::all().filter(|b| *b != a) {
                let ra = layout.cells[a.row()][a.col()];
                let rb = layout.cells[b.row()][b.col()];
                assert!(!ra.intersects(rb), "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn test_outside_board_is_no_cell() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.cell_at(0, 0), None);
        assert_eq!(layout.cell_at(79, 23), None);
    }

    #[test]
    fn test_buttons() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24));
        let (x, y) = center(layout.mark_button(Mark::X));
        assert_eq!(layout.mark_button_at(x, y), Some(Mark::X));
        let (x, y) = center(layout.mark_button(Mark::O));
        assert_eq!(layout.mark_button_at(x, y), Some(Mark::O));
        assert_eq!(layout.mark_button_at(0, 0), None);

        let (x, y) = center(layout.again_button);
        assert!(layout.again_button_at(x, y));
        assert!(!layout.again_button_at(0, 0));
    }

    #[test]
    fn test_tiny_terminal_stays_in_bounds() {
        let area = Rect::new(0, 0, 10, 5);
        let layout = ScreenLayout::compute(area);
        for mv in Move::all() {
            let cell = layout.cells[mv.row()][mv.col()];
            assert!(cell.is_empty() || area.contains(Position::new(cell.x, cell.y)));
        }
    }
}
