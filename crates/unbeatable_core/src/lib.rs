//! Pure tic-tac-toe game logic with a perfect-play opponent.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`] is an immutable 3x3 value. It derives whose
//!   turn it is, lists legal moves, applies moves and reports the outcome.
//! - **Rules**: [`rules`] holds the win and outcome checks as free functions.
//! - **Search**: [`search`] computes the optimal move by exhaustive minimax.
//!
//! Everything here is value-in, value-out: no I/O, no global state.
//!
//! # Example
//!
//! ```
//! use unbeatable_core::{Board, Mark, Move, Outcome, search};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(board.active_player(), Mark::X);
//!
//! let mv = search::best_move(&board)?;
//! assert_eq!(mv, Move::new(0, 2));
//! assert_eq!(board.apply(mv)?.outcome(), Outcome::XWins);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
pub mod rules;
pub mod search;
mod types;

// Crate-level exports - Board model
pub use action::{Move, SIZE};
pub use board::Board;
pub use types::{Cell, Mark, Outcome};

// Crate-level exports - Errors
pub use error::{IllegalMoveError, NoMoveAvailableError, ParseBoardError};

// Crate-level exports - Search
pub use search::{ScoredMove, Value, best_move};
