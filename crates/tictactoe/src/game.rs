//! Game driver that runs the full move protocol over a [`GameState`].

use crate::invariants::{HistoryConsistentInvariant, InvariantSet, MarkBalanceInvariant};
use crate::{GameState, GameStatus, Mark, Move, MoveError, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Each call to [`play`](Self::play) places the current player's mark,
/// checks for a winner and then for a full board, and switches turns only
/// while the game continues. Once won or drawn, further moves are refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) state: GameState,
    pub(crate) history: Vec<Move>,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Rebuilds a game by playing `positions` in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] raised along the way.
    #[instrument]
    pub fn replay(positions: &[isize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &pos in positions {
            game.play(pos)?;
        }
        Ok(game)
    }

    /// Returns the underlying board and turn state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the status after the latest move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.state.current_player()
    }

    /// Plays the current player's mark at `position` (0-8).
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn
    /// - [`MoveError::OutOfRange`] for an index outside 0-8
    /// - [`MoveError::SquareOccupied`] when the square is taken
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn play(&mut self, position: isize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_signed(position).ok_or(MoveError::OutOfRange(position))?;

        let player = self.state.current_player();
        if !self.state.attempt_move(position) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.history.push(Move::new(player, pos));

        self.status = if let Some(winner) = self.state.check_winner() {
            GameStatus::Won(winner)
        } else if self.state.is_board_full() {
            GameStatus::Draw
        } else {
            self.state.switch_turn();
            GameStatus::InProgress
        };

        debug_assert_eq!(
            <(MarkBalanceInvariant, HistoryConsistentInvariant)>::check_all(&*self),
            Ok(())
        );

        match self.status {
            GameStatus::InProgress => debug!(next = %self.to_move(), "Turn passed"),
            GameStatus::Won(winner) => info!(%winner, moves = self.history.len(), "Game won"),
            GameStatus::Draw => info!(moves = self.history.len(), "Game drawn"),
        }
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
