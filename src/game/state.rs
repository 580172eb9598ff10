//! The game aggregate and its pure move transition.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, ColoredPiece, GameStatus, Square};

/// One played move as shown in the move log.
///
/// `piece` is the piece that moved, before any promotion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveHistoryEntry {
    pub from: Square,
    pub to: Square,
    pub piece: ColoredPiece,
}

impl fmt::Display for MoveHistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// Pieces taken so far, filed under the color that took them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapturedPieces {
    white: Vec<ColoredPiece>,
    black: Vec<ColoredPiece>,
}

impl CapturedPieces {
    /// Pieces captured by `capturer`, in the order they were taken.
    #[must_use]
    pub fn by(&self, capturer: Color) -> &[ColoredPiece] {
        match capturer {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    /// Sum of capture values taken by `capturer`.
    #[must_use]
    pub fn material(&self, capturer: Color) -> u32 {
        self.by(capturer)
            .iter()
            .map(|p| p.piece.capture_value())
            .sum()
    }

    fn record(&mut self, capturer: Color, piece: ColoredPiece) {
        match capturer {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}

/// Everything that defines a game in progress.
///
/// Values are never edited in place from outside: [`GameState::play`]
/// returns the successor state and leaves `self` as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    board: Board,
    status: GameStatus,
    active: Color,
    history: Vec<MoveHistoryEntry>,
    captured: CapturedPieces,
}

impl GameState {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState::from_position(Board::new(), Color::White)
    }

    /// A game starting from an arbitrary position with `to_move` on turn.
    ///
    /// The status is evaluated immediately, so a position with no legal
    /// moves for `to_move` starts out finished.
    #[must_use]
    pub fn from_position(board: Board, to_move: Color) -> Self {
        GameState {
            status: board.status_for(to_move),
            board,
            active: to_move,
            history: Vec::new(),
            captured: CapturedPieces::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side on turn. The move that ends the game does not pass the turn,
    /// so a finished game reports the side that delivered the final move.
    #[inline]
    #[must_use]
    pub fn active(&self) -> Color {
        self.active
    }

    #[must_use]
    pub fn history(&self) -> &[MoveHistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Legal destinations for the piece on `from`, if it may move now.
    ///
    /// Empty when the game is over or `from` does not hold a piece of the
    /// side to move.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        if self.is_over() || !self.owns(from) {
            return Vec::new();
        }
        self.board.legal_moves(from)
    }

    /// Play `from -> to` and return the resulting state.
    ///
    /// Returns `None` for anything that is not a legal move for the side to
    /// move, including moves after the game has ended.
    #[must_use]
    pub fn play(&self, from: Square, to: Square) -> Option<GameState> {
        if self.is_over() || !self.owns(from) || !self.board.is_legal_move(from, to) {
            crate::log_trace!("rejected {}{} with {} to move", from, to, self.active);
            return None;
        }

        let applied = self.board.apply_move(from, to);
        let piece = applied.moved?;
        let mover = self.active;

        let mut next = self.clone();
        next.board = applied.board;
        next.history.push(MoveHistoryEntry { from, to, piece });
        if let Some(victim) = applied.captured() {
            next.captured.record(mover, victim);
        }
        next.status = next.board.status_for(mover.opponent());
        if !next.status.is_over() {
            next.active = mover.opponent();
        }

        crate::log_debug!(
            "{} played {} ({}), status {}",
            mover,
            applied.mv,
            piece,
            next.status
        );
        Some(next)
    }

    fn owns(&self, sq: Square) -> bool {
        self.board
            .piece_at(sq)
            .is_some_and(|p| p.color == self.active)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
