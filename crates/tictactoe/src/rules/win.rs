//! Win detection logic for tic-tac-toe.

use crate::{Cell, Mark};
use tracing::instrument;

/// The eight winning triples: rows, then columns, then diagonals.
///
/// Order matters: on a malformed board with several completed lines the
/// first one listed here decides the reported winner.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line in [`WINNING_LINES`] holding
/// three identical marks, `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(cells: &[Cell; 9]) -> Option<Mark> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a].mark()?;
        (cells[b] == cells[a] && cells[c] == cells[a]).then_some(mark)
    })
}
