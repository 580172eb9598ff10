//! Game flow on top of the board rules.
//!
//! [`GameState`] is the whole game as a value with a pure transition,
//! [`GameController`] adds the human/computer split and click selection,
//! and [`GameConfig`] carries the command-line settings.

mod config;
mod controller;
mod state;

pub use crate::board::GameStatus;
pub use config::{ConfigError, GameConfig, DEFAULT_AI_DELAY_MS};
pub use controller::{GameController, GameView, SelectionOutcome};
pub use state::{CapturedPieces, GameState, MoveHistoryEntry};
