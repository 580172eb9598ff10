//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Parse a piece from a character (p, n, b, r, q, k), case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Material value used by the move selector when scoring captures.
    ///
    /// Pawn=1, Knight=3, Bishop=3, Rook=5, Queen=9. The king is worth 0:
    /// it can never actually be taken in a legal game.
    #[inline]
    #[must_use]
    pub const fn capture_value(self) -> u32 {
        match self {
            Piece::Pawn => 1,
            Piece::Knight | Piece::Bishop => 3,
            Piece::Rook => 5,
            Piece::Queen => 9,
            Piece::King => 0,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Pawn => "pawn",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
            Piece::King => "king",
        };
        f.write_str(name)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step (-1 for White, +1 for Black).
    ///
    /// Row 0 is Black's back rank, so White pawns advance towards it.
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns of this color start on (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_home_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Back rank row of this color (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece of a given color, as stored on a board square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColoredPiece {
    pub color: Color,
    pub piece: Piece,
}

impl ColoredPiece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        ColoredPiece { color, piece }
    }

    /// Parse from a FEN character: uppercase is White, lowercase is Black.
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Self> {
        let piece = Piece::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(ColoredPiece { color, piece })
    }

    /// FEN character (uppercase for White)
    #[must_use]
    pub fn to_fen_char(self) -> char {
        let c = self.piece.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Unicode chess glyph for presenters.
    #[must_use]
    pub const fn symbol(self) -> char {
        match (self.color, self.piece) {
            (Color::White, Piece::King) => '♔',
            (Color::White, Piece::Queen) => '♕',
            (Color::White, Piece::Rook) => '♖',
            (Color::White, Piece::Bishop) => '♗',
            (Color::White, Piece::Knight) => '♘',
            (Color::White, Piece::Pawn) => '♙',
            (Color::Black, Piece::King) => '♚',
            (Color::Black, Piece::Queen) => '♛',
            (Color::Black, Piece::Rook) => '♜',
            (Color::Black, Piece::Bishop) => '♝',
            (Color::Black, Piece::Knight) => '♞',
            (Color::Black, Piece::Pawn) => '♟',
        }
    }
}

impl fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.piece)
    }
}
