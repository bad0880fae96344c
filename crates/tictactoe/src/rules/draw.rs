//! Draw detection logic for tic-tac-toe.

use crate::Cell;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// A full board with no winner is a draw.
#[instrument(level = "trace")]
pub fn is_full(cells: &[Cell; 9]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}
