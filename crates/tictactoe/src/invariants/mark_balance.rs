//! Mark balance invariant: X leads O by at most one mark.

use super::Invariant;
use crate::{Game, GameState, Mark};

/// Invariant: the X count minus the O count is 0 or 1.
///
/// X moves first and turns alternate, so any board reached by correct
/// play satisfies this. [`GameState`] alone does not enforce it.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.mark_count(Mark::X);
        let o = state.mark_count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        <Self as Invariant<GameState>>::holds(game.state())
    }

    fn description() -> &'static str {
        <Self as Invariant<GameState>>::description()
    }
}
