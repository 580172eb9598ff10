//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_duel::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.occupied().count(), 3);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let pieces = Board::new()
            .occupied()
            .map(|(sq, p)| (sq, p.color, p.piece))
            .collect();
        BoardBuilder { pieces }
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board. Off-board squares are dropped.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }
        board
    }
}
