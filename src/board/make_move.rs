use super::{Board, ColoredPiece, Move, Piece, Square};

/// A board produced by executing a move, with the move's annotations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AppliedMove {
    /// Position after the move
    pub board: Board,
    /// The move, carrying the captured piece and promotion flag
    pub mv: Move,
    /// The piece that moved, as it stood on the origin square
    pub moved: Option<ColoredPiece>,
}

impl AppliedMove {
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<ColoredPiece> {
        self.mv.captured
    }
}

impl Board {
    /// Execute `from -> to` on a copy of this board.
    ///
    /// Whatever stands on `to` is recorded as captured and replaced by the
    /// mover; `from` is cleared. A pawn arriving on row 0 or row 7 becomes a
    /// queen of its color. Legality is not checked here: callers validate
    /// with `is_legal_move` first.
    #[must_use]
    pub fn apply_move(&self, from: Square, to: Square) -> AppliedMove {
        let mut board = *self;
        let moved = board.piece_at(from);
        let captured = board.piece_at(to);

        let promoted = moved.is_some_and(|p| p.piece == Piece::Pawn && (to.row() == 0 || to.row() == 7));
        let placed = match moved {
            Some(p) if promoted => Some(ColoredPiece::new(p.color, Piece::Queen)),
            other => other,
        };

        board.put(to, placed);
        board.put(from, None);

        AppliedMove {
            board,
            mv: Move {
                from,
                to,
                captured,
                promoted,
            },
            moved,
        }
    }
}
