//! Player trait and implementations.

mod first_free;
mod minimax;
mod random;

pub use first_free::FirstFreePlayer;
pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;

use anyhow::Result;
use std::time::Duration;
use unbeatable_core::{Board, Move};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Chooses a move for the active player on `board`.
    async fn choose_move(&mut self, board: &Board) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Kinds of computer player selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PlayerKind {
    /// Perfect play via exhaustive minimax.
    Minimax,
    /// Always takes the first empty cell.
    FirstFree,
    /// Picks uniformly among empty cells.
    Random,
}

impl PlayerKind {
    /// Builds a boxed player of this kind.
    pub fn create(self, name: impl Into<String>, think_delay: Duration) -> Box<dyn Player> {
        match self {
            PlayerKind::Minimax => Box::new(MinimaxPlayer::new(name).with_think_delay(think_delay)),
            PlayerKind::FirstFree => Box::new(FirstFreePlayer::new(name)),
            PlayerKind::Random => Box::new(RandomPlayer::new(name)),
        }
    }
}
