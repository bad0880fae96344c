//! Transcript tests for the interactive shell.

use std::io::Cursor;
use tictactoe::{GameStatus, Mark};
use tictactoe_cli::{BoardStyle, CliConfig, Shell};

fn quiet_config() -> CliConfig {
    CliConfig::default().with_overrides(None, true, true)
}

fn run(input: &str, config: CliConfig) -> (Vec<GameStatus>, String) {
    let mut shell = Shell::new(Cursor::new(input.to_string()), Vec::new(), config);
    let results = shell.run().unwrap();
    let output = String::from_utf8(shell.into_output()).unwrap();
    (results, output)
}

#[test]
fn test_row_win_announced() {
    let (results, output) = run("1\n4\n2\n5\n3\n", quiet_config());
    assert_eq!(results, [GameStatus::Won(Mark::X)]);
    assert!(output.contains("Player X wins!"));
    assert!(output.contains(" X | X | X "));
    assert!(output.ends_with("Thanks for playing!\n"));
    assert!(!output.contains("Play again?"));
}

#[test]
fn test_draw_announced() {
    let (results, output) = run("1\n2\n3\n5\n4\n6\n8\n7\n9\n", quiet_config());
    assert_eq!(results, [GameStatus::Draw]);
    assert!(output.contains("It's a draw!"));
}

#[test]
fn test_prompts_alternate_players() {
    let (_, output) = run("5\n1\n", quiet_config());
    let x = output.find("Player X, choose a square (1-9): ").unwrap();
    let o = output.find("Player O, choose a square (1-9): ").unwrap();
    assert!(x < o);
}

#[test]
fn test_invalid_input_reprompts_same_player() {
    // "abc", "0" and "10" are refused, then 5 is taken twice.
    let input = "abc\n0\n10\n5\n5\n1\n";
    let (results, output) = run(input, quiet_config());
    assert!(results.is_empty());
    assert_eq!(output.matches("Please enter a number from 1 to 9.").count(), 1);
    assert_eq!(
        output
            .matches("That square is not available. Try again.")
            .count(),
        3
    );
    assert_eq!(output.matches("Player X, choose").count(), 5);
    assert_eq!(output.matches("Player O, choose").count(), 2);
}

#[test]
fn test_rematch_starts_fresh_game() {
    let mut config = CliConfig::default().with_overrides(None, true, false);
    assert!(*config.ask_replay());
    config = config.with_overrides(Some(BoardStyle::Blank), true, false);

    let input = "1\n4\n2\n5\n3\nY\n4\n1\n5\n2\n6\nn\n";
    let (results, output) = run(input, config);
    assert_eq!(results, [GameStatus::Won(Mark::X), GameStatus::Won(Mark::X)]);
    assert_eq!(output.matches("Play again? (y/n): ").count(), 2);
}

#[test]
fn test_eof_at_rematch_prompt_ends_session() {
    let config = CliConfig::default();
    let (results, output) = run("1\n4\n2\n5\n3\n", config);
    assert_eq!(results, [GameStatus::Won(Mark::X)]);
    assert!(output.contains("Squares are numbered:"));
    assert!(output.ends_with("Thanks for playing!\n"));
}

#[test]
fn test_eof_mid_game() {
    let (results, output) = run("1\n", quiet_config());
    assert!(results.is_empty());
    assert!(output.ends_with("Thanks for playing!\n"));
}
