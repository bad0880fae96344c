//! History consistency invariant: the board is exactly its move history.

use super::Invariant;
use crate::{Cell, Game};

/// Invariant: replaying the history onto an empty board reproduces it.
///
/// Each recorded move must land on a square that was still empty, which
/// also makes the board monotonic (no square is ever overwritten).
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = [Cell::Empty; 9];

        for mov in game.history() {
            let cell = &mut reconstructed[mov.position.to_index()];
            if !cell.is_empty() {
                return false;
            }
            *cell = Cell::Marked(mov.player);
        }

        &reconstructed == game.state().cells()
    }

    fn description() -> &'static str {
        "Board matches move history (squares never overwritten)"
    }
}
