//! Command-line interface for unbeatable.

use crate::players::PlayerKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use unbeatable_core::Mark;

/// Unbeatable - tic-tac-toe against a perfect-play opponent
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Tic-tac-toe against a computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal against the computer
    Play {
        /// Mark to play as; skips the selection screen
        #[arg(short, long, value_enum)]
        mark: Option<MarkArg>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the optimal move for a board
    BestMove {
        /// Board in row-major order, e.g. "XX./OO./..."
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also list the value of every legal move
        #[arg(long)]
        all: bool,
    },

    /// Play computer players against each other and tally the results
    Duel {
        /// Player taking X
        #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
        x: PlayerKind,

        /// Player taking O
        #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
        o: PlayerKind,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,
    },
}

/// Mark choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    /// Play as X (moves first)
    X,
    /// Play as O
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}
