//! Simple AI that picks the first available square.

use super::Player;
use anyhow::Result;
use tracing::debug;
use unbeatable_core::{Board, Move};

/// Takes the first empty cell in row-major order.
pub struct FirstFreePlayer {
    name: String,
}

impl FirstFreePlayer {
    /// Creates a new first-free player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Player for FirstFreePlayer {
    async fn choose_move(&mut self, board: &Board) -> Result<Move> {
        let Some(mv) = board.legal_moves().first().copied() else {
            anyhow::bail!("No valid moves available");
        };
        debug!(player = %self.name, mv = %mv, "First-free player chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
