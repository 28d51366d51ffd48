//! Unbeatable - unified CLI
//!
//! Plays tic-tac-toe in the terminal, analyses positions, and runs
//! computer-versus-computer series.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, instrument};
use unbeatable::cli::{Cli, Command, MarkArg};
use unbeatable::players::PlayerKind;
use unbeatable::{AppConfig, analyze, logging, play_series, tui};
use unbeatable_core::Board;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        mark: None,
        config: None,
    }) {
        Command::Play { mark, config } => run_play(mark, config).await,
        Command::BestMove { board, json, all } => run_best_move(&board, json, all),
        Command::Duel { x, o, games } => run_duel(x, o, games).await,
    }
}

/// Run the interactive terminal game
async fn run_play(mark: Option<MarkArg>, config: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config.as_deref())?.with_human_mark(mark.map(Into::into));

    // Log to a file to avoid interfering with the TUI
    logging::init_file(config.log_file())?;
    info!(?config, "Starting interactive game");

    tui::run_tui(config).await
}

/// Print the optimal move for a board
#[instrument]
fn run_best_move(board: &str, json: bool, all: bool) -> Result<()> {
    logging::init_stderr();

    let parsed: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let analysis = analyze(&parsed, all).with_context(|| format!("No move for {}", parsed))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", analysis);
    }
    Ok(())
}

/// Run a series of computer-versus-computer games
async fn run_duel(x: PlayerKind, o: PlayerKind, games: u32) -> Result<()> {
    logging::init_stderr();
    info!(%x, %o, games, "Starting duel");

    let tally = play_series(x, o, games).await?;
    println!("{}", tally);
    Ok(())
}
