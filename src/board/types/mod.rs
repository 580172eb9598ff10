//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the crate:
//! - `Piece`, `Color` and `ColoredPiece` - piece kinds, colors and their pairing
//! - `Square` - (row, column) board coordinates
//! - `Move` - a from/to pair annotated with capture and promotion

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, ColoredPiece, Piece};
pub use square::Square;
