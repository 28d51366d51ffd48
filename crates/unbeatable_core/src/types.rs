//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol used in the board text form.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Character used in the board text form.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(mark) => mark.symbol(),
        }
    }
}

/// Result of a game, always derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Outcome {
    /// X completed a line.
    #[strum(to_string = "X wins")]
    XWins,
    /// O completed a line.
    #[strum(to_string = "O wins")]
    OWins,
    /// Board is full with no completed line.
    #[strum(to_string = "Tie")]
    Tie,
    /// Game is still being played.
    #[strum(to_string = "In progress")]
    InProgress,
}

impl Outcome {
    /// Outcome for a game won by `mark`.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => Outcome::XWins,
            Mark::O => Outcome::OWins,
        }
    }

    /// Returns the winning mark, if the game was won.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::Tie | Outcome::InProgress => None,
        }
    }

    /// True once the game can no longer continue.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}
