//! Two-player chess with a single-ply computer opponent.
//!
//! [`board`] holds the rules, [`game`] the turn and selection bookkeeping,
//! [`ai`] the opponent and [`console`] a line-oriented front end.

// Logging goes through the `log` facade when the `logging` feature is on.
// Without it the macros only type-check their arguments.

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

pub(crate) use log_debug;
pub(crate) use log_trace;
pub(crate) use log_warn;

pub mod ai;
pub mod board;
pub mod console;
pub mod game;

pub use board::{Board, Color, Move, Piece, Square};
pub use game::{GameConfig, GameController, GameState, GameStatus};
