//! Game rules for tic-tac-toe.
//!
//! Pure functions over a row-major cell array. They hold no state, so
//! [`GameState`](crate::GameState) and the invariant checks share them.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner};
