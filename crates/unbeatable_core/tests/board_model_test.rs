//! Tests for the tic-tac-toe board model.

use unbeatable_core::{Board, Cell, IllegalMoveError, Mark, Move, Outcome};

fn board(text: &str) -> Board {
    text.parse().expect("valid board text")
}

/// Walks every reachable position, checking that each move hands the turn
/// to the other mark.
fn check_alternation(board: &Board, visited: &mut usize) {
    *visited += 1;
    if board.is_terminal() {
        return;
    }
    let mover = board.active_player();
    for mv in board.legal_moves() {
        let next = board.apply(mv).expect("legal move");
        assert_eq!(next.get(mv), Cell::Marked(mover));
        assert_eq!(next.active_player(), mover.opponent());
        check_alternation(&next, visited);
    }
}

#[test]
fn test_initial_state() {
    let board = Board::initial();
    assert_eq!(board.outcome(), Outcome::InProgress);
    assert_eq!(board.legal_moves().len(), 9);
    assert_eq!(board.winner(), None);
    assert!(!board.is_terminal());
    assert_eq!(board.active_player(), Mark::X);
}

#[test]
fn test_active_player_alternates_over_whole_tree() {
    let mut visited = 0;
    check_alternation(&Board::initial(), &mut visited);
    // Number of move sequences that end when the game does.
    assert_eq!(visited, 549_946);
}

#[test]
fn test_legal_moves_are_row_major() {
    let board = board("X../.O./..X");
    assert_eq!(
        board.legal_moves(),
        vec![
            Move::new(0, 1),
            Move::new(0, 2),
            Move::new(1, 0),
            Move::new(1, 2),
            Move::new(2, 0),
            Move::new(2, 1),
        ]
    );
}

#[test]
fn test_legal_moves_empty_when_full() {
    assert!(board("XOX/OXX/OXO").legal_moves().is_empty());
}

#[test]
fn test_same_player_moves_commute() {
    // X plays (0,0) and (2,2) in either order around O's (1,1).
    let a = [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)];
    let b = [Move::new(2, 2), Move::new(1, 1), Move::new(0, 0)];

    let play = |moves: &[Move]| {
        moves.iter().try_fold(Board::initial(), |board, mv| board.apply(*mv))
    };

    let first = play(&a).expect("legal sequence");
    let second = play(&b).expect("legal sequence");
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "X../.O./..X");
}

#[test]
fn test_apply_is_atomic_on_illegal_move() {
    let board = board("XX./OO./...");
    let before = board;
    let result = board.apply(Move::new(1, 0));
    assert_eq!(
        result,
        Err(IllegalMoveError {
            mv: Move::new(1, 0)
        })
    );
    assert_eq!(board, before);
}

#[test]
fn test_row_major_fill_terminates() {
    let mut board = Board::initial();
    let mut played = 0;
    for mv in Move::all() {
        if board.is_terminal() {
            break;
        }
        board = board.apply(mv).expect("row-major cells are empty in order");
        played += 1;
    }
    assert!(board.is_terminal());
    assert!(played <= 9);
    // X completes the anti-diagonal on the seventh move.
    assert_eq!(played, 7);
    assert_eq!(board.outcome(), Outcome::XWins);
    assert_eq!(board.to_string(), "XOX/OXO/X..");
}

#[test]
fn test_no_winner_without_completed_line() {
    for text in [".........", "X........", "XO.X.....", "XOX/OXX/OXO", "XX./OO./..."] {
        let board = board(text);
        assert_eq!(board.winner(), None, "board {board}");
    }
}

#[test]
fn test_outcomes() {
    assert_eq!(board("XXX/OO./...").outcome(), Outcome::XWins);
    assert_eq!(board("X.O/XO./O.X").outcome(), Outcome::OWins);
    assert_eq!(board("XOX/OXX/OXO").outcome(), Outcome::Tie);
    assert_eq!(board("XO./.../...").outcome(), Outcome::InProgress);
}

#[test]
fn test_board_serializes() {
    let board = board("X../.O./...");
    let json = serde_json::to_string(&board).expect("serialize");
    let back: Board = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, board);
}
