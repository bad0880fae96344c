//! Named board squares and conversion from user-facing numbers.

use crate::GameState;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A square on the board.
///
/// Discriminants are the 0-based row-major cell index; players see the
/// same squares numbered 1 through 9.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from a board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a signed index such as the one handed to
    /// [`GameState::attempt_move`].
    pub fn from_signed(index: isize) -> Option<Self> {
        usize::try_from(index).ok().and_then(Self::from_index)
    }

    /// Returns the number players type for this square (1-9).
    pub fn to_one_based(self) -> usize {
        self.to_index() + 1
    }

    /// Converts a user-facing square number (1-9) to its 0-based index.
    ///
    /// The result is not range checked: `0` becomes `-1` and `10` becomes
    /// `9`, both of which the game rejects as ordinary invalid moves.
    pub fn one_based_to_index(number: i64) -> isize {
        isize::try_from(number.saturating_sub(1)).unwrap_or(isize::MAX)
    }

    /// Filters positions by board state, returning only empty squares.
    #[instrument(skip(state))]
    pub fn valid_moves(state: &GameState) -> Vec<Position> {
        Position::iter()
            .filter(|pos| state.is_valid_move(pos.to_index() as isize))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_from_signed() {
        assert_eq!(Position::from_signed(-1), None);
        assert_eq!(Position::from_signed(4), Some(Position::Center));
        assert_eq!(Position::from_signed(9), None);
    }

    #[test]
    fn test_one_based_conversion() {
        assert_eq!(Position::one_based_to_index(1), 0);
        assert_eq!(Position::one_based_to_index(9), 8);
        assert_eq!(Position::one_based_to_index(0), -1);
        assert_eq!(Position::one_based_to_index(10), 9);
        assert_eq!(Position::BottomRight.to_one_based(), 9);
    }

    #[test]
    fn test_one_based_extremes_stay_out_of_range() {
        assert!(Position::from_signed(Position::one_based_to_index(i64::MIN)).is_none());
        assert!(Position::from_signed(Position::one_based_to_index(i64::MAX)).is_none());
    }
}
