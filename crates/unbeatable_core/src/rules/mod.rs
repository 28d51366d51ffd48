//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so each can be tested on its own; the board's methods
//! delegate here.

pub mod outcome;
pub mod win;

pub use outcome::{is_full, is_terminal, outcome};
pub use win::{LINES, winner};
