use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, ColoredPiece, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// `Board` is a plain `Copy` value: every speculative evaluation works on its
/// own copy, so trying a move can never disturb the board it came from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<ColoredPiece>; 8]; 8],
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            let back = color.back_row();
            let pawns = color.pawn_home_row();
            for (col, &piece) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(ColoredPiece::new(color, piece));
                board.squares[pawns][col] = Some(ColoredPiece::new(color, Piece::Pawn));
            }
        }
        board
    }

    /// A board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Piece on `sq`, or `None` for an empty or off-board square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.squares
            .get(sq.row())
            .and_then(|row| row.get(sq.col()))
            .copied()
            .flatten()
    }

    #[inline]
    #[must_use]
    pub fn is_empty_square(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place (or replace) a piece. Off-board squares are ignored.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.put(sq, Some(ColoredPiece::new(color, piece)));
    }

    /// Empty a square. Off-board squares are ignored.
    pub fn clear_square(&mut self, sq: Square) {
        self.put(sq, None);
    }

    pub(crate) fn put(&mut self, sq: Square, content: Option<ColoredPiece>) {
        if let Some(cell) = self
            .squares
            .get_mut(sq.row())
            .and_then(|row| row.get_mut(sq.col()))
        {
            *cell = content;
        }
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Squares holding pieces of `color`, in row-major order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.occupied()
            .filter(move |(_, p)| p.color == color)
            .map(|(sq, _)| sq)
    }

    /// First square (row-major) holding the king of `color`.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = ColoredPiece::new(color, Piece::King);
        self.occupied()
            .find(|&(_, p)| p == king)
            .map(|(sq, _)| sq)
    }

    /// Count of pieces of the given color and type
    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        let target = ColoredPiece::new(color, piece);
        self.occupied().filter(|&(_, p)| p == target).count()
    }

    /// Copy of this board with the piece on `from` relocated to `to`.
    ///
    /// Whatever stood on `to` is overwritten and `from` is cleared. No
    /// promotion happens here; this is the throwaway board used to ask
    /// "would this leave a king attacked?".
    #[must_use]
    pub fn with_relocation(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        let moving = next.piece_at(from);
        next.put(to, moving);
        next.put(from, None);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                let c = self
                    .piece_at(Square(row, col))
                    .map_or('.', ColoredPiece::to_fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        assert_eq!(
            board.piece_at(Square(0, 3)),
            Some(ColoredPiece::new(Color::Black, Piece::Queen))
        );
        assert_eq!(
            board.piece_at(Square(0, 4)),
            Some(ColoredPiece::new(Color::Black, Piece::King))
        );
        assert_eq!(
            board.piece_at(Square(7, 4)),
            Some(ColoredPiece::new(Color::White, Piece::King))
        );
        for col in 0..8 {
            assert_eq!(
                board.piece_at(Square(1, col)),
                Some(ColoredPiece::new(Color::Black, Piece::Pawn))
            );
            assert_eq!(
                board.piece_at(Square(6, col)),
                Some(ColoredPiece::new(Color::White, Piece::Pawn))
            );
            for row in 2..6 {
                assert!(board.is_empty_square(Square(row, col)));
            }
        }
        assert_eq!(board.occupied().count(), 32);
    }

    #[test]
    fn test_off_board_access_is_empty() {
        let mut board = Board::new();
        assert_eq!(board.piece_at(Square(8, 0)), None);
        assert_eq!(board.piece_at(Square(0, 12)), None);
        board.set_piece(Square(9, 9), Color::White, Piece::Queen);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_find_king_missing() {
        let board = Board::empty();
        assert_eq!(board.find_king(Color::White), None);
        assert_eq!(Board::new().find_king(Color::White), Some(Square(7, 4)));
    }

    #[test]
    fn test_relocation_leaves_source_untouched() {
        let board = Board::new();
        let next = board.with_relocation(Square(6, 4), Square(4, 4));
        assert!(board.piece_at(Square(6, 4)).is_some());
        assert!(board.is_empty_square(Square(4, 4)));
        assert!(next.is_empty_square(Square(6, 4)));
        assert_eq!(
            next.piece_at(Square(4, 4)),
            Some(ColoredPiece::new(Color::White, Piece::Pawn))
        );
    }
}
