//! Text rendering of the board and game messages.

use crate::config::BoardStyle;
use tictactoe::{Cell, GameState, GameStatus, Mark, Position};

const ROW_SEPARATOR: &str = "---|---|---";

fn grid(symbols: impl Fn(usize) -> String) -> String {
    let separator = format!("\n{ROW_SEPARATOR}\n");
    (0..3)
        .map(|row| {
            let cols: Vec<_> = (0..3).map(|col| format!(" {} ", symbols(row * 3 + col))).collect();
            cols.join("|")
        })
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Formats the board as a 3×3 grid.
pub fn board(state: &GameState, style: BoardStyle) -> String {
    grid(|i| match state.cells()[i] {
        Cell::Marked(mark) => mark.to_string(),
        Cell::Empty => match style {
            BoardStyle::Blank => " ".to_string(),
            BoardStyle::Numbered => (i + 1).to_string(),
        },
    })
}

/// Formats the 1-9 square numbering.
pub fn position_guide() -> String {
    let grid = grid(|i| Position::ALL[i].to_one_based().to_string());
    format!("Squares are numbered:\n{grid}")
}

/// Prompt shown before reading a move.
pub fn prompt(player: Mark) -> String {
    format!("Player {player}, choose a square (1-9): ")
}

/// Announcement for a finished game, `None` while still in progress.
pub fn outcome(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(mark) => Some(format!("Player {mark} wins!")),
        GameStatus::Draw => Some("It's a draw!".to_string()),
    }
}
