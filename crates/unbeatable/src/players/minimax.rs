//! Computer player backed by the minimax search.

use super::Player;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, instrument};
use unbeatable_core::{Board, Move, search};

/// Perfect-play opponent.
///
/// The search runs on tokio's blocking pool so a caller's render loop keeps
/// ticking while it works.
pub struct MinimaxPlayer {
    name: String,
    think_delay: Duration,
}

impl MinimaxPlayer {
    /// Creates a minimax player that answers immediately.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            think_delay: Duration::ZERO,
        }
    }

    /// Waits `delay` before each move.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    #[instrument(skip(self, board), fields(player = %self.name, board = %board))]
    async fn choose_move(&mut self, board: &Board) -> Result<Move> {
        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let board = *board;
        let mv = tokio::task::spawn_blocking(move || search::best_move(&board))
            .await
            .context("Search task failed")??;

        debug!(mv = %mv, "Minimax chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
