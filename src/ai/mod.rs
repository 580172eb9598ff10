//! Single-ply heuristic move selection.
//!
//! Every legal move of the side to play gets
//! `jitter + 10 * captured value + 50 if it checks the opponent`,
//! and the highest score wins. There is no look-ahead beyond that one ply;
//! the jitter term gives the opponent some variety between games.

mod jitter;

pub use jitter::{FixedJitter, JitterSource, RandomJitter, ScriptedJitter, JITTER_RANGE};

use crate::board::{Board, Color, Move, Square};

/// Multiplier applied to the captured piece's value.
pub const CAPTURE_WEIGHT: u32 = 10;

/// Bonus for a move that leaves the opponent's king attacked.
pub const CHECK_BONUS: u32 = 50;

/// A candidate move with its total score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredMove {
    pub mv: Move,
    /// Capture and check terms only
    pub heuristic: u32,
    /// `heuristic` plus the random term
    pub score: f64,
}

/// Deterministic part of a move's score: capture value and check bonus.
///
/// The check is judged on the board with the mover simply relocated, the
/// same throwaway board the legality filter uses.
#[must_use]
pub fn heuristic_score(board: &Board, from: Square, to: Square) -> u32 {
    let Some(mover) = board.piece_at(from) else {
        return 0;
    };
    let capture = board
        .piece_at(to)
        .map_or(0, |victim| CAPTURE_WEIGHT * victim.piece.capture_value());
    let check = if board
        .with_relocation(from, to)
        .is_in_check(mover.color.opponent())
    {
        CHECK_BONUS
    } else {
        0
    };
    capture + check
}

/// Score every legal move of `color`, in enumeration order.
///
/// Enumeration is row-major over origins, then each origin's legal
/// destinations in row-major order. One jitter value is drawn per move.
pub fn score_moves<J: JitterSource>(board: &Board, color: Color, jitter: &mut J) -> Vec<ScoredMove> {
    board
        .all_legal_moves(color)
        .into_iter()
        .map(|mv| {
            let heuristic = heuristic_score(board, mv.from, mv.to);
            ScoredMove {
                mv,
                heuristic,
                score: jitter.jitter() + f64::from(heuristic),
            }
        })
        .collect()
}

/// Pick the best-scoring legal move for `color`, or `None` if it has none.
///
/// Ties go to the move enumerated first.
pub fn find_best_move<J: JitterSource>(board: &Board, color: Color, jitter: &mut J) -> Option<Move> {
    let scored = score_moves(board, color, jitter);
    let candidates = scored.len();
    let best = scored.into_iter().fold(None::<ScoredMove>, |best, candidate| match best {
        Some(current) if current.score >= candidate.score => Some(current),
        _ => Some(candidate),
    })?;

    crate::log_debug!(
        "{} picks {} (score {:.2}, heuristic {}) from {} candidates",
        color,
        best.mv,
        best.score,
        best.heuristic,
        candidates
    );
    Some(best.mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    #[test]
    fn test_prefers_most_valuable_capture() {
        // Black knight d5 can take the white queen on e3 or the pawn on c3.
        let board = Board::from_fen("k7/8/8/3n4/8/2P1Q3/8/7K");
        let best = find_best_move(&board, Color::Black, &mut FixedJitter(0.0));
        assert_eq!(best, Some(Move::new(Square(3, 3), Square(5, 4))));
    }

    #[test]
    fn test_check_bonus_beats_minor_capture() {
        // Rook h8 can check along the a-file or back rank (+50) or take the knight on h2 (+30).
        let board = Board::from_fen("7r/8/2k5/8/8/8/7N/K7");
        assert_eq!(heuristic_score(&board, Square(0, 7), Square(0, 0)), CHECK_BONUS);
        assert_eq!(
            heuristic_score(&board, Square(0, 7), Square(6, 7)),
            CAPTURE_WEIGHT * Piece::Knight.capture_value()
        );
        let best = find_best_move(&board, Color::Black, &mut FixedJitter(0.0));
        assert_eq!(best, Some(Move::new(Square(0, 7), Square(0, 0))));
    }

    #[test]
    fn test_capture_with_check_adds_up() {
        // Queen takes the rook on a4 and lands on the king's file.
        let board = Board::from_fen("k7/8/8/8/R3q3/8/8/K7");
        assert_eq!(
            heuristic_score(&board, Square(4, 4), Square(4, 0)),
            CAPTURE_WEIGHT * Piece::Rook.capture_value() + CHECK_BONUS
        );
    }

    #[test]
    fn test_ties_go_to_first_enumerated_move() {
        let board = Board::new();
        let best = find_best_move(&board, Color::White, &mut FixedJitter(0.0));
        let first = board.all_legal_moves(Color::White)[0];
        assert_eq!(best, Some(first));
    }

    #[test]
    fn test_jitter_breaks_ties() {
        let board = Board::new();
        let moves = board.all_legal_moves(Color::White);
        let mut values = vec![0.0; moves.len()];
        values[5] = 9.0;
        let best = find_best_move(&board, Color::White, &mut ScriptedJitter::new(values));
        assert_eq!(best, Some(moves[5]));
    }

    #[test]
    fn test_no_moves_means_no_choice() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8");
        assert_eq!(
            find_best_move(&board, Color::Black, &mut FixedJitter(0.0)),
            None
        );
    }

    #[test]
    fn test_scores_follow_enumeration_order() {
        let board = Board::new();
        let scored = score_moves(&board, Color::Black, &mut FixedJitter(1.5));
        let legal = board.all_legal_moves(Color::Black);
        assert_eq!(scored.len(), legal.len());
        for (s, mv) in scored.iter().zip(legal) {
            assert_eq!(s.mv, mv);
            assert_eq!(s.heuristic, 0);
            assert!((s.score - 1.5).abs() < f64::EPSILON);
        }
    }
}
