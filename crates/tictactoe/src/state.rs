//! Board contents and turn tracking.

use crate::rules;
use crate::{Cell, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Complete game state: nine cells in row-major order and the player to move.
///
/// `GameState` validates single moves but does not sequence them. Callers
/// alternate turns with [`switch_turn`](Self::switch_turn) and stop once
/// [`check_winner`](Self::check_winner) or
/// [`is_board_full`](Self::is_board_full) reports a terminal board. Use
/// [`Game`](crate::Game) to have that protocol enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    cells: [Cell; BOARD_SIZE],
    current_player: Mark,
}

impl GameState {
    /// Creates an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
            current_player: Mark::X,
        }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Returns the cell at `index`, or `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns the mark that moves next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Counts the cells holding `mark`.
    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(mark))
            .count()
    }

    /// Checks that `position` is on the board and still empty.
    ///
    /// Negative and too-large positions are simply invalid.
    #[instrument(skip(self))]
    pub fn is_valid_move(&self, position: isize) -> bool {
        usize::try_from(position)
            .ok()
            .and_then(|index| self.cell(index))
            .is_some_and(Cell::is_empty)
    }

    /// Places the current player's mark at `position`.
    ///
    /// Returns `false` and leaves the board untouched when the position is
    /// out of range or already taken. The turn is not switched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn attempt_move(&mut self, position: isize) -> bool {
        if !self.is_valid_move(position) {
            debug!("Move rejected");
            return false;
        }
        // is_valid_move guarantees 0 <= position < BOARD_SIZE
        self.cells[position as usize] = Cell::Marked(self.current_player);
        debug!("Move placed");
        true
    }

    /// Hands the turn to the other player, unconditionally.
    #[instrument(skip(self), fields(from = %self.current_player))]
    pub fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Returns the winning mark, if any line is complete.
    pub fn check_winner(&self) -> Option<Mark> {
        rules::check_winner(&self.cells)
    }

    /// Checks if every cell holds a mark.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Classifies the board: a winner takes precedence over a full board.
    pub fn status(&self) -> GameStatus {
        match self.check_winner() {
            Some(mark) => GameStatus::Won(mark),
            None if self.is_board_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
