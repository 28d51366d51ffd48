//! Game orchestration between players.

use crate::players::{Player, PlayerKind};
use anyhow::{Context, Result};
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use unbeatable_core::{Board, Mark, Move, Outcome};

/// Messages sent from the orchestrator to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was applied.
    MoveMade {
        /// Name of the player that moved.
        player: String,
        /// Mark that was placed.
        mark: Mark,
        /// Cell that was marked.
        mv: Move,
        /// Board after the move.
        board: Board,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Name of the winning player, if any.
        winner: Option<String>,
    },
}

/// Orchestrates a game between two players.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl Orchestrator {
    /// Creates a new orchestrator on an empty board.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            board: Board::initial(),
            player_x,
            player_o,
            event_tx: None,
        }
    }

    /// Sends [`GameEvent`]s to `event_tx` while running.
    pub fn with_events(mut self, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop until the board is terminal.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move or produces an illegal one.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");

        while !self.board.is_terminal() {
            let mark = self.board.active_player();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let mv = player.choose_move(&self.board).await?;
            let name = player.name().to_string();

            self.board = self
                .board
                .apply(mv)
                .with_context(|| format!("{} played an illegal move", name))?;

            self.emit(GameEvent::MoveMade {
                player: name,
                mark,
                mv,
                board: self.board,
            });
        }

        let outcome = self.board.outcome();
        let winner = outcome.winner().map(|mark| match mark {
            Mark::X => self.player_x.name().to_string(),
            Mark::O => self.player_o.name().to_string(),
        });
        info!(%outcome, board = %self.board, "Game over");
        self.emit(GameEvent::GameOver { outcome, winner });

        Ok(outcome)
    }

    /// Restarts the game on an empty board.
    pub fn restart(&mut self) {
        self.board = Board::initial();
    }

    fn emit(&self, event: GameEvent) {
        if let Some(tx) = &self.event_tx
            && tx.send(event).is_err()
        {
            debug!("Event receiver dropped");
        }
    }
}

/// Outcome counts over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub ties: u32,
}

impl Tally {
    /// Records a finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWins => self.x_wins += 1,
            Outcome::OWins => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {}
        }
    }

    /// Number of games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} tied",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.ties
        )
    }
}

/// Plays `games` games between fresh players of the given kinds.
#[instrument]
pub async fn play_series(x: PlayerKind, o: PlayerKind, games: u32) -> Result<Tally> {
    let mut tally = Tally::default();
    for game in 1..=games {
        let player_x = x.create(format!("{} (X)", x), Duration::ZERO);
        let player_o = o.create(format!("{} (O)", o), Duration::ZERO);
        let outcome = Orchestrator::new(player_x, player_o).run().await?;
        debug!(game, %outcome, "Series game finished");
        tally.record(outcome);
    }
    info!(%tally, "Series complete");
    Ok(tally)
}
