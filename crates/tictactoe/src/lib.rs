//! Pure tic-tac-toe game logic.
//!
//! The crate is split into a permissive core and an opt-in driver:
//!
//! - [`GameState`] owns the nine cells and whose turn it is. It validates
//!   individual moves but trusts the caller to alternate turns and to stop
//!   once the game is over.
//! - [`Game`] wraps a [`GameState`] and runs the full move protocol
//!   (place, check for a winner, check for a draw, switch turns) as one
//!   step, rejecting moves once the game has ended.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, Mark};
//!
//! let mut state = GameState::new();
//! for (i, pos) in [0, 3, 1, 4, 2].into_iter().enumerate() {
//!     assert!(state.attempt_move(pos));
//!     if i < 4 {
//!         state.switch_turn();
//!     }
//! }
//! assert_eq!(state.check_winner(), Some(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod invariants;
mod position;
mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use invariants::{
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant,
};
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, is_full};
pub use state::{BOARD_SIZE, GameState};
pub use types::{Cell, GameStatus, Mark};
