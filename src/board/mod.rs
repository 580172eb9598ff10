//! Chess board representation and move rules.
//!
//! The board is a copyable 8x8 grid of optional pieces. Every rule in here
//! is a pure function of a board: generating moves, testing for check and
//! executing a move all leave their input untouched and hand back new values.
//!
//! # Example
//! ```
//! use chess_duel::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let moves = board.all_legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//!
//! let next = board.apply_move(Square(6, 4), Square(4, 4)).board;
//! assert!(!next.is_in_check(Color::Black));
//! ```

mod builder;
mod check;
mod error;
mod fen;
mod legal;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, SquareError};
pub use legal::GameStatus;
pub use make_move::AppliedMove;
pub use state::Board;
pub use types::{Color, ColoredPiece, Move, Piece, Square};
