//! Unbeatable - terminal tic-tac-toe against a perfect-play computer.
//!
//! The game rules and search live in [`unbeatable_core`]. This crate adds
//! the players, the orchestrator that runs games between them, the
//! terminal UI, and the command-line plumbing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod logging;
pub mod orchestrator;
pub mod players;
pub mod tui;

pub use analysis::{Analysis, analyze};
pub use config::{AppConfig, ConfigError};
pub use orchestrator::{GameEvent, Orchestrator, Tally, play_series};
pub use players::{FirstFreePlayer, MinimaxPlayer, Player, PlayerKind, RandomPlayer};
