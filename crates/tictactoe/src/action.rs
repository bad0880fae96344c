//! Move records and the errors the [`Game`](crate::Game) driver reports.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{} -> {}", player, position)]
pub struct Move {
    /// The player making the move.
    pub player: Mark,
    /// The square the mark was placed on.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Mark, position: Position) -> Self {
        Self { player, position }
    }
}

/// Why the [`Game`](crate::Game) driver refused a move.
///
/// [`GameState::attempt_move`](crate::GameState::attempt_move) folds the
/// first two cases into a single `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] isize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}
