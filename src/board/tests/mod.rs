//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece movement rules and path clearance
//! - `game_over.rs` - Check, checkmate and stalemate detection
//! - `make_move.rs` - Move execution, captures and promotion
//! - `proptest.rs` - Property-based tests

mod game_over;
mod make_move;
