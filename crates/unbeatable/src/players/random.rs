//! Player that picks uniformly among legal moves.

use super::Player;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;
use unbeatable_core::{Board, Move};

/// Random opponent.
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player seeded from entropy.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a random player with a fixed seed, for reproducible games.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

#[async_trait::async_trait]
impl Player for RandomPlayer {
    async fn choose_move(&mut self, board: &Board) -> Result<Move> {
        let moves = board.legal_moves();
        let Some(mv) = moves.choose(&mut self.rng).copied() else {
            anyhow::bail!("No valid moves available");
        };
        debug!(player = %self.name, mv = %mv, "Random player chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
