//! Behavioral tests for the caller-driven `GameState` protocol.

use tictactoe::{Cell, GameState, Mark, Position};

/// Plays `moves` with a turn switch between each, like the console shell.
fn play_alternating(moves: &[isize]) -> GameState {
    let mut state = GameState::new();
    for (i, &pos) in moves.iter().enumerate() {
        assert!(state.attempt_move(pos), "move {pos} rejected");
        if i + 1 < moves.len() {
            state.switch_turn();
        }
    }
    state
}

#[test]
fn test_fresh_state_accepts_every_square() {
    let state = GameState::new();
    for pos in 0..9 {
        assert!(state.is_valid_move(pos));
    }
    assert_eq!(Position::valid_moves(&state).len(), 9);
}

#[test]
fn test_out_of_range_positions_rejected() {
    let mut state = GameState::new();
    for pos in [-100, -1, 9, 10, isize::MAX, isize::MIN] {
        assert!(!state.is_valid_move(pos));
        assert!(!state.attempt_move(pos));
    }
    assert_eq!(state, GameState::new());
}

#[test]
fn test_cells_are_write_once() {
    let mut state = GameState::new();
    assert!(state.attempt_move(4));
    for _ in 0..3 {
        state.switch_turn();
        assert!(!state.is_valid_move(4));
        assert!(!state.attempt_move(4));
        assert_eq!(state.cell(4), Some(Cell::Marked(Mark::X)));
    }
}

#[test]
fn test_occupied_move_never_mutates() {
    let mut state = play_alternating(&[0, 4]);
    let before = state.clone();
    assert!(!state.attempt_move(0));
    assert!(!state.attempt_move(4));
    assert_eq!(state, before);
}

#[test]
fn test_turn_alternation() {
    let mut state = GameState::new();
    assert_eq!(state.current_player(), Mark::X);
    state.switch_turn();
    assert_eq!(state.current_player(), Mark::O);
    state.switch_turn();
    assert_eq!(state.current_player(), Mark::X);
}

#[test]
fn test_row_win() {
    let state = play_alternating(&[0, 3, 1, 4, 2]);
    assert_eq!(state.check_winner(), Some(Mark::X));
}

#[test]
fn test_column_win() {
    let state = play_alternating(&[0, 1, 3, 2, 6]);
    assert_eq!(state.check_winner(), Some(Mark::X));
}

#[test]
fn test_diagonal_win() {
    let state = play_alternating(&[0, 1, 4, 2, 8]);
    assert_eq!(state.check_winner(), Some(Mark::X));
}

#[test]
fn test_o_can_win() {
    // X:0 O:3 X:1 O:4 X:8 O:5
    let state = play_alternating(&[0, 3, 1, 4, 8, 5]);
    assert_eq!(state.check_winner(), Some(Mark::O));
}

#[test]
fn test_draw() {
    let state = play_alternating(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.check_winner(), None);
    assert!(state.is_board_full());
}

#[test]
fn test_board_full_only_when_no_empty_cell() {
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    let mut state = GameState::new();
    for (i, &pos) in moves.iter().enumerate() {
        assert!(!state.is_board_full(), "full after {i} moves");
        state.attempt_move(pos);
        state.switch_turn();
    }
    assert!(state.is_board_full());
}

#[test]
fn test_check_winner_is_idempotent() {
    for moves in [&[][..], &[0, 3, 1][..], &[0, 3, 1, 4, 2][..]] {
        let state = play_alternating(moves);
        let first = state.check_winner();
        for _ in 0..5 {
            assert_eq!(state.check_winner(), first);
        }
        assert_eq!(state, play_alternating(moves));
    }
}

#[test]
fn test_moves_still_accepted_after_terminal_state() {
    // The core leaves stopping to the caller.
    let mut state = play_alternating(&[0, 3, 1, 4, 2]);
    state.switch_turn();
    assert!(state.attempt_move(8));
    assert_eq!(state.check_winner(), Some(Mark::X));
}

#[test]
fn test_serialized_shape() {
    let state = play_alternating(&[4]);
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["current_player"], "X");
    assert_eq!(json["cells"][0], "Empty");
    assert_eq!(json["cells"][4], serde_json::json!({ "Marked": "X" }));
}
