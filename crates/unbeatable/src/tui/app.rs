//! Application state and logic.
//!
//! Everything here is synchronous and terminal-free: the event loop in
//! [`super::run_tui`] feeds keys, clicks and computer replies in, and reads
//! back what to draw and whether a search needs starting.

use super::input::{digit_move, move_cursor};
use super::layout::ScreenLayout;
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument, warn};
use unbeatable_core::search::{self, ScoredMove};
use unbeatable_core::{Board, Mark, Move, Outcome};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choosing X or O; `selected` is the highlighted button.
    ChooseMark {
        /// Highlighted choice.
        selected: Mark,
    },
    /// A game is being played.
    Playing,
    /// The game finished.
    GameOver,
}

/// Request for the computer to move on `board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerRequest {
    /// Board to search.
    pub board: Board,
    /// Game the request belongs to.
    pub generation: u64,
}

/// The computer's answer to a [`ComputerRequest`].
#[derive(Debug)]
pub struct ComputerReply {
    /// Board the move was computed for.
    pub board: Board,
    /// Game the reply belongs to.
    pub generation: u64,
    /// Chosen move, or why none was produced.
    pub result: anyhow::Result<Move>,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    board: Board,
    human: Mark,
    fixed_mark: Option<Mark>,
    cursor: Move,
    show_hints: bool,
    hints: Option<(Board, Vec<ScoredMove>)>,
    thinking: bool,
    generation: u64,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app. With `fixed_mark` the selection screen is skipped.
    pub fn new(fixed_mark: Option<Mark>, show_hints: bool) -> Self {
        let mut app = Self {
            screen: Screen::ChooseMark { selected: Mark::X },
            board: Board::initial(),
            human: Mark::X,
            fixed_mark,
            cursor: Move::new(1, 1),
            show_hints,
            hints: None,
            thinking: false,
            generation: 0,
            notice: None,
            should_quit: false,
        };
        if let Some(mark) = fixed_mark {
            app.start(mark);
        }
        app
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark the human plays.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Cursor cell.
    pub fn cursor(&self) -> Move {
        self.cursor
    }

    /// True while a computer move is pending.
    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    /// Transient message for the status bar.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True when it is the human's move.
    pub fn is_human_turn(&self) -> bool {
        self.screen == Screen::Playing
            && !self.board.is_terminal()
            && self.board.active_player() == self.human
    }

    /// Title line, matching the game's state.
    pub fn title(&self) -> String {
        match self.screen {
            Screen::ChooseMark { .. } => "Play Tic-Tac-Toe".to_string(),
            Screen::GameOver => format!("Game Over: {}.", self.board.outcome()),
            Screen::Playing if self.is_human_turn() => format!("Play as {}", self.human),
            Screen::Playing => "Computer thinking...".to_string(),
        }
    }

    /// Move values for the hint overlay, when hints are on.
    pub fn hints(&self) -> Option<&[ScoredMove]> {
        if !self.show_hints {
            return None;
        }
        match &self.hints {
            Some((board, hints)) if *board == self.board => Some(hints),
            _ => None,
        }
    }

    /// Starts a game with the human playing `mark`.
    #[instrument(skip(self))]
    pub fn start(&mut self, mark: Mark) {
        info!("Starting new game");
        self.human = mark;
        self.board = Board::initial();
        self.cursor = Move::new(1, 1);
        self.screen = Screen::Playing;
        self.thinking = false;
        self.generation += 1;
        self.notice = None;
        self.refresh_hints();
    }

    /// Returns to mark selection, or straight into a new game when the mark
    /// is fixed.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        match self.fixed_mark {
            Some(mark) => self.start(mark),
            None => {
                self.generation += 1;
                self.thinking = false;
                self.board = Board::initial();
                self.notice = None;
                self.screen = Screen::ChooseMark {
                    selected: self.human,
                };
            }
        }
    }

    /// Hands out a search request when the computer is due to move.
    ///
    /// Returns `None` while a request is already outstanding.
    pub fn take_computer_request(&mut self) -> Option<ComputerRequest> {
        let due = self.screen == Screen::Playing
            && !self.thinking
            && !self.board.is_terminal()
            && self.board.active_player() != self.human;
        if !due {
            return None;
        }
        self.thinking = true;
        Some(ComputerRequest {
            board: self.board,
            generation: self.generation,
        })
    }

    /// Applies the computer's reply, ignoring replies for stale games.
    #[instrument(skip(self, reply), fields(generation = reply.generation))]
    pub fn apply_computer_move(&mut self, reply: ComputerReply) {
        if reply.generation != self.generation || reply.board != self.board {
            debug!("Discarding stale computer move");
            return;
        }
        self.thinking = false;

        match reply.result {
            Ok(mv) => match self.board.apply(mv) {
                Ok(next) => {
                    info!(mv = %mv, "Computer moved");
                    self.advance(next);
                }
                Err(e) => {
                    warn!(error = %e, "Computer produced an illegal move");
                    self.notice = Some(e.to_string());
                }
            },
            Err(e) => {
                warn!(error = %e, "Computer failed to move");
                self.notice = Some(format!("Computer error: {}", e));
            }
        }
    }

    /// Plays `mv` for the human. Ignored when it is not the human's turn.
    #[instrument(skip(self, mv), fields(mv = %mv))]
    pub fn play_human(&mut self, mv: Move) {
        if !self.is_human_turn() {
            debug!("Ignoring move outside the human's turn");
            return;
        }
        self.cursor = mv;
        match self.board.apply(mv) {
            Ok(next) => {
                info!("Human moved");
                self.notice = None;
                self.advance(next);
            }
            Err(e) => {
                debug!(error = %e, "Discarding illegal move");
                self.notice = Some("That cell is taken".to_string());
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::ChooseMark { selected } => match key {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    self.screen = Screen::ChooseMark {
                        selected: selected.opponent(),
                    };
                }
                KeyCode::Char('x') | KeyCode::Char('X') => self.start(Mark::X),
                KeyCode::Char('o') | KeyCode::Char('O') => self.start(Mark::O),
                KeyCode::Enter | KeyCode::Char(' ') => self.start(selected),
                _ => {}
            },
            Screen::Playing => match key {
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    self.cursor = move_cursor(self.cursor, key);
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.play_human(self.cursor),
                KeyCode::Char('h') => self.toggle_hints(),
                KeyCode::Char('r') => self.restart(),
                KeyCode::Char(c) => {
                    if let Some(mv) = digit_move(c) {
                        self.play_human(mv);
                    }
                }
                _ => {}
            },
            Screen::GameOver => {
                if matches!(key, KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char(' ')) {
                    self.restart();
                }
            }
        }
    }

    /// Handles a left click at terminal position `(column, row)`.
    pub fn handle_click(&mut self, layout: &ScreenLayout, column: u16, row: u16) {
        match self.screen {
            Screen::ChooseMark { .. } => {
                if let Some(mark) = layout.mark_button_at(column, row) {
                    self.start(mark);
                }
            }
            Screen::Playing => {
                if let Some(mv) = layout.cell_at(column, row) {
                    self.play_human(mv);
                }
            }
            Screen::GameOver => {
                if layout.again_button_at(column, row) {
                    self.restart();
                }
            }
        }
    }

    /// Shows or hides move values.
    pub fn toggle_hints(&mut self) {
        self.show_hints = !self.show_hints;
        self.refresh_hints();
    }

    fn advance(&mut self, next: Board) {
        self.board = next;
        if self.board.outcome() != Outcome::InProgress {
            info!(outcome = %self.board.outcome(), "Game finished");
            self.screen = Screen::GameOver;
        }
        self.refresh_hints();
    }

    fn refresh_hints(&mut self) {
        if !self.show_hints || !self.is_human_turn() {
            return;
        }
        if matches!(&self.hints, Some((board, _)) if *board == self.board) {
            return;
        }
        match search::scored_moves(&self.board) {
            Ok(scored) => self.hints = Some((self.board, scored)),
            Err(e) => debug!(error = %e, "No hints for finished game"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn reply(request: ComputerRequest, result: anyhow::Result<Move>) -> ComputerReply {
        ComputerReply {
            board: request.board,
            generation: request.generation,
            result,
        }
    }

    #[test]
    fn test_starts_on_mark_selection() {
        let app = App::new(None, false);
        assert_eq!(app.screen(), Screen::ChooseMark { selected: Mark::X });
        assert_eq!(app.title(), "Play Tic-Tac-Toe");
    }

    #[test]
    fn test_choose_mark_with_keys() {
        let mut app = App::new(None, false);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.screen(), Screen::ChooseMark { selected: Mark::O });
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.human(), Mark::O);
        assert_eq!(app.title(), "Computer thinking...");
    }

    #[test]
    fn test_human_as_x_moves_first() {
        let mut app = App::new(Some(Mark::X), false);
        assert_eq!(app.title(), "Play as X");
        assert!(app.take_computer_request().is_none());

        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.board().to_string(), ".../.X./...");
        assert!(!app.is_human_turn());

        let request = app.take_computer_request().expect("computer to move");
        assert!(app.take_computer_request().is_none());
        assert!(app.is_thinking());

        app.apply_computer_move(reply(request, Ok(Move::new(0, 0))));
        assert_eq!(app.board().to_string(), "O../.X./...");
        assert!(app.is_human_turn());
        assert!(!app.is_thinking());
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut app = App::new(Some(Mark::X), false);
        app.play_human(Move::new(0, 0));
        let request = app.take_computer_request().expect("computer to move");
        app.apply_computer_move(reply(request, Ok(Move::new(1, 1))));

        let before = *app.board();
        app.play_human(Move::new(1, 1));
        assert_eq!(*app.board(), before);
        assert_eq!(app.notice(), Some("That cell is taken"));
        assert!(app.is_human_turn());
    }

    #[test]
    fn test_stale_reply_is_discarded() {
        let mut app = App::new(Some(Mark::O), false);
        let request = app.take_computer_request().expect("computer opens");
        app.restart();
        app.apply_computer_move(reply(request, Ok(Move::new(2, 2))));
        assert_eq!(*app.board(), Board::initial());
    }

    #[test]
    fn test_game_over_and_restart() {
        let mut app = App::new(None, false);
        app.handle_key(KeyCode::Char('x'));
        for (human, computer) in [((0, 0), (1, 0)), ((0, 1), (1, 1))] {
            app.play_human(Move::new(human.0, human.1));
            let request = app.take_computer_request().expect("computer to move");
            app.apply_computer_move(reply(request, Ok(Move::new(computer.0, computer.1))));
        }
        app.play_human(Move::new(0, 2));
        assert_eq!(app.screen(), Screen::GameOver);
        assert_eq!(app.title(), "Game Over: X wins.");
        assert!(app.take_computer_request().is_none());

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.screen(), Screen::ChooseMark { selected: Mark::X });
        assert_eq!(*app.board(), Board::initial());
    }

    #[test]
    fn test_clicks() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24));
        let mut app = App::new(None, false);

        let button = layout.mark_button(Mark::X);
        app.handle_click(&layout, button.x + 1, button.y + 1);
        assert_eq!(app.screen(), Screen::Playing);

        let cell = layout.cells[2][0];
        app.handle_click(&layout, cell.x + 1, cell.y + 1);
        assert_eq!(app.board().to_string(), ".../.../X..");
    }

    #[test]
    fn test_hints_follow_board() {
        let mut app = App::new(Some(Mark::X), false);
        assert!(app.hints().is_none());
        app.play_human(Move::new(0, 0));
        let request = app.take_computer_request().expect("computer to move");
        app.apply_computer_move(reply(request, Ok(Move::new(1, 1))));

        app.handle_key(KeyCode::Char('h'));
        let hints = app.hints().expect("hints on");
        assert_eq!(hints.len(), 7);
        assert!(hints.iter().all(|h| h.value == 0));
    }

    #[test]
    fn test_computer_error_sets_notice() {
        let mut app = App::new(Some(Mark::O), false);
        let request = app.take_computer_request().expect("computer opens");
        app.apply_computer_move(reply(request, Err(anyhow::anyhow!("boom"))));
        assert_eq!(app.notice(), Some("Computer error: boom"));
        assert!(!app.is_thinking());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(None, false);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
