//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unbeatable_core::{Cell, Mark, Move, Value};

use super::app::{App, Screen};
use super::layout::ScreenLayout;

/// Renders the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    // Title
    let title = Paragraph::new(app.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    match app.screen() {
        Screen::ChooseMark { selected } => {
            for mark in [Mark::X, Mark::O] {
                let label = format!("Play as {}", mark);
                draw_button(frame, layout.mark_button(mark), &label, mark == selected);
            }
        }
        Screen::Playing => draw_board(frame, app, layout),
        Screen::GameOver => {
            draw_board(frame, app, layout);
            draw_button(frame, layout.again_button, "Play Again", true);
        }
    }

    // Status
    let status_text = Paragraph::new(status_line(app))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, layout.status);
}

fn status_line(app: &App) -> String {
    let help = match app.screen() {
        Screen::ChooseMark { .. } => "←/→ choose, Enter start, x/o pick, q quit",
        Screen::Playing => "Arrows move, Enter place, 1-9 place, h hints, r restart, q quit",
        Screen::GameOver => "Enter/r play again, q quit",
    };
    match app.notice() {
        Some(notice) => format!("{} | {}", notice, help),
        None => help.to_string(),
    }
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, highlighted: bool) {
    let style = if highlighted {
        Style::default()
            .bg(Color::White)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let button = Paragraph::new(label.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_board(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    for mv in Move::all() {
        draw_cell(frame, app, layout.cells[mv.row()][mv.col()], mv);
    }
}

fn draw_cell(frame: &mut Frame, app: &App, area: Rect, mv: Move) {
    let (symbol, base_style) = match app.board().get(mv) {
        Cell::Empty => match hint_for(app, mv) {
            Some(label) => (label, Style::default().fg(Color::DarkGray)),
            None => ("", Style::default().fg(Color::DarkGray)),
        },
        Cell::Marked(Mark::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if app.is_human_turn() && mv == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
}

/// Hint label for an empty cell, from the human's point of view.
fn hint_for(app: &App, mv: Move) -> Option<&'static str> {
    let scored = app.hints()?.iter().find(|s| s.mv == mv)?;
    Some(hint_label(scored.value, app.human()))
}

fn hint_label(value: Value, human: Mark) -> &'static str {
    let for_human = match human {
        Mark::X => value,
        Mark::O => -value,
    };
    match for_human.signum() {
        1 => "win",
        -1 => "lose",
        _ => "draw",
    }
}
