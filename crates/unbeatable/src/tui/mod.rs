//! Terminal UI: a human against the minimax computer.

mod app;
mod input;
mod layout;
mod ui;

pub use app::{App, ComputerReply, ComputerRequest, Screen};
pub use layout::ScreenLayout;

use crate::config::AppConfig;
use crate::players::{MinimaxPlayer, Player};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the interactive game until the user quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting Unbeatable TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, dispatch input, and hand computer turns to background tasks.
#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &AppConfig,
) -> Result<()> {
    let mut app = App::new(*config.human_mark(), *config.show_hints());
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<ComputerReply>();
    let mut layout = ScreenLayout::default();

    loop {
        if let Some(request) = app.take_computer_request() {
            debug!(generation = request.generation, "Spawning computer move");
            let tx = reply_tx.clone();
            let delay = config.think_delay();
            tokio::spawn(async move {
                let mut computer = MinimaxPlayer::new("Computer").with_think_delay(delay);
                let result = computer.choose_move(&request.board).await;
                // Receiver gone means the UI already exited.
                let _ = tx.send(ComputerReply {
                    board: request.board,
                    generation: request.generation,
                    result,
                });
            });
        }

        terminal.draw(|frame| {
            layout = ScreenLayout::compute(frame.area());
            ui::draw(frame, &app, &layout);
        })?;

        while let Ok(reply) = reply_rx.try_recv() {
            app.apply_computer_move(reply);
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    debug!(key = ?key.code, "Key pressed");
                    app.handle_key(key.code);
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    debug!(column = mouse.column, row = mouse.row, "Mouse click");
                    app.handle_click(&layout, mouse.column, mouse.row);
                }
                _ => {}
            }
        }

        if app.should_quit() {
            info!("Exiting TUI");
            return Ok(());
        }
    }
}
