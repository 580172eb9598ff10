//! Move execution: captures, promotion and purity.

use crate::board::{Board, BoardBuilder, Color, ColoredPiece, Piece, Square};

fn promote(color: Color, from: Square, to: Square, victim: Option<Piece>) -> Board {
    let mut builder = BoardBuilder::new().piece(from, color, Piece::Pawn);
    if let Some(piece) = victim {
        builder = builder.piece(to, color.opponent(), piece);
    }
    let board = builder.build();
    assert!(board.is_legal_move(from, to), "{from}{to} should be legal");
    let applied = board.apply_move(from, to);
    assert!(applied.mv.promoted);
    applied.board
}

#[test]
fn test_promotion_by_push_for_both_colors() {
    for col in 0..8 {
        let white = promote(Color::White, Square(1, col), Square(0, col), None);
        assert_eq!(
            white.piece_at(Square(0, col)),
            Some(ColoredPiece::new(Color::White, Piece::Queen))
        );
        assert_eq!(white.count(Color::White, Piece::Pawn), 0);

        let black = promote(Color::Black, Square(6, col), Square(7, col), None);
        assert_eq!(
            black.piece_at(Square(7, col)),
            Some(ColoredPiece::new(Color::Black, Piece::Queen))
        );
    }
}

#[test]
fn test_promotion_by_capture() {
    let white = promote(Color::White, Square(1, 3), Square(0, 4), Some(Piece::Rook));
    assert_eq!(
        white.piece_at(Square(0, 4)),
        Some(ColoredPiece::new(Color::White, Piece::Queen))
    );

    let black = promote(Color::Black, Square(6, 7), Square(7, 6), Some(Piece::Knight));
    assert_eq!(
        black.piece_at(Square(7, 6)),
        Some(ColoredPiece::new(Color::Black, Piece::Queen))
    );
    assert_eq!(black.count(Color::White, Piece::Knight), 0);
}

#[test]
fn test_non_pawn_reaching_edge_is_not_promoted() {
    let board = Board::from_fen("8/R7/8/8/8/8/8/8");
    let applied = board.apply_move(Square(1, 0), Square(0, 0));
    assert!(!applied.mv.promoted);
    assert_eq!(
        applied.board.piece_at(Square(0, 0)),
        Some(ColoredPiece::new(Color::White, Piece::Rook))
    );
}

#[test]
fn test_capture_records_victim_and_keeps_piece_count() {
    let board = Board::from_fen("4k3/8/8/8/8/8/1n6/R3K3");
    let applied = board.apply_move(Square(7, 0), Square(6, 0));
    assert_eq!(applied.captured(), None);

    let capture = board.apply_move(Square(7, 0), Square(6, 1));
    // Rook a1 cannot reach b2, but the executor does not validate.
    assert_eq!(
        capture.captured(),
        Some(ColoredPiece::new(Color::Black, Piece::Knight))
    );
    assert_eq!(capture.board.occupied().count(), board.occupied().count() - 1);
}

#[test]
fn test_executor_never_mutates_input() {
    let board = Board::new();
    let snapshot = board;
    for mv in board.all_legal_moves(Color::White) {
        let a = board.apply_move(mv.from, mv.to);
        let b = board.apply_move(mv.from, mv.to);
        assert_eq!(a, b);
        assert_eq!(board, snapshot);
    }
}
