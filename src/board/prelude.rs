//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_duel::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.status_for(Color::White), GameStatus::Playing);
//! ```

pub use super::{
    AppliedMove, Board, BoardBuilder, Color, ColoredPiece, FenError, GameStatus, Move, Piece,
    Square, SquareError,
};
