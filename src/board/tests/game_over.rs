//! Check, checkmate and stalemate detection.

use crate::board::{Board, Color, GameStatus, Square};

fn play(board: Board, moves: &[((usize, usize), (usize, usize))]) -> Board {
    moves.iter().fold(board, |b, &((fr, fc), (tr, tc))| {
        let from = Square(fr, fc);
        let to = Square(tr, tc);
        assert!(b.is_legal_move(from, to), "{from}{to} should be legal");
        b.apply_move(from, to).board
    })
}

#[test]
fn test_fools_mate_black_wins() {
    // 1. f3 e5 2. g4 Qh4#
    let board = play(
        Board::new(),
        &[((6, 5), (5, 5)), ((1, 4), (3, 4)), ((6, 6), (4, 6)), ((0, 3), (4, 7))],
    );
    assert!(board.is_in_check(Color::White));
    assert!(!board.has_any_legal_move(Color::White));
    assert_eq!(
        board.status_for(Color::White),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert!(board.is_checkmate(Color::White));
}

#[test]
fn test_reversed_fools_mate_white_wins() {
    // 1. e4 f6 2. d4 g5 3. Qh5#
    let board = play(
        Board::new(),
        &[
            ((6, 4), (4, 4)),
            ((1, 5), (2, 5)),
            ((6, 3), (4, 3)),
            ((1, 6), (3, 6)),
            ((7, 3), (3, 7)),
        ],
    );
    assert!(board.is_in_check(Color::Black));
    assert!(board.all_legal_moves(Color::Black).is_empty());
    assert_eq!(
        board.status_for(Color::Black),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_queen_stalemate() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.is_in_check(Color::Black));
    assert!(!board.has_any_legal_move(Color::Black));
    assert_eq!(board.status_for(Color::Black), GameStatus::Stalemate);
    assert!(board.is_stalemate(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
}

#[test]
fn test_check_with_escape_is_still_playing() {
    // Rook gives check along the back rank, but the king can step up.
    let board = Board::from_fen("4k3/8/8/8/8/8/8/r3K3");
    assert!(board.is_in_check(Color::White));
    assert!(board.has_any_legal_move(Color::White));
    assert_eq!(board.status_for(Color::White), GameStatus::Playing);
}

#[test]
fn test_check_can_be_answered_by_capture() {
    // Black queen on e2 checks the king on e1 but is defended by nothing.
    let board = Board::from_fen("k7/8/8/8/8/8/4q3/4K3");
    let moves = board.legal_moves(Square(7, 4));
    assert_eq!(moves, vec![Square(6, 4)]);
    assert_eq!(board.status_for(Color::White), GameStatus::Playing);
}

#[test]
fn test_back_rank_mate() {
    let board = Board::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1");
    assert_eq!(
        board.status_for(Color::Black),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_bare_board_is_stalemate_for_both() {
    // No pieces means no legal moves and no king to attack.
    let board = Board::empty();
    assert_eq!(board.status_for(Color::White), GameStatus::Stalemate);
    assert_eq!(board.status_for(Color::Black), GameStatus::Stalemate);
}
