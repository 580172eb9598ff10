//! Legal move filtering and game-over detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Move, Square};

/// Whether the game goes on, and if not, how it ended.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Playing,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate are terminal.
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Destinations from `from` that do not leave the mover's own king attacked.
    ///
    /// Each candidate is tried on a throwaway copy of the board; `self` is
    /// never touched. Row-major order, as in `pseudo_legal_moves`.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        let Some(mover) = self.piece_at(from) else {
            return Vec::new();
        };
        self.pseudo_legal_moves(from)
            .into_iter()
            .filter(|&to| !self.with_relocation(from, to).is_in_check(mover.color))
            .collect()
    }

    /// Whether `from -> to` is a legal move for the piece on `from`.
    #[must_use]
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        self.piece_at(from).is_some_and(|mover| {
            self.can_reach(from, to) && !self.with_relocation(from, to).is_in_check(mover.color)
        })
    }

    /// Every legal move for `color`.
    ///
    /// Origins are visited in row-major order and each origin's destinations
    /// follow `legal_moves` order, so the list is deterministic.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        self.squares_of(color)
            .flat_map(|from| {
                self.legal_moves(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Whether any piece of `color` has at least one legal move.
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.squares_of(color)
            .any(|from| !self.legal_moves(from).is_empty())
    }

    /// Status of the game with `to_move` about to play.
    ///
    /// Checkmate names the other color as winner: that is the side that just
    /// moved into this position.
    #[must_use]
    pub fn status_for(&self, to_move: Color) -> GameStatus {
        if self.has_any_legal_move(to_move) {
            GameStatus::Playing
        } else if self.is_in_check(to_move) {
            GameStatus::Checkmate {
                winner: to_move.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Convenience: the side to move is checkmated.
    #[must_use]
    pub fn is_checkmate(&self, to_move: Color) -> bool {
        matches!(self.status_for(to_move), GameStatus::Checkmate { .. })
    }

    /// Convenience: the side to move is stalemated.
    #[must_use]
    pub fn is_stalemate(&self, to_move: Color) -> bool {
        self.status_for(to_move) == GameStatus::Stalemate
    }
}
