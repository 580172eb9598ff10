//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::ColoredPiece;
use super::square::Square;

/// A move from one square to another.
///
/// Moves produced by the executor carry the piece they captured (if any)
/// and whether the mover was promoted; plain `(from, to)` requests leave
/// both annotations empty.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<ColoredPiece>,
    pub promoted: bool,
}

impl Move {
    /// An unannotated move request
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
            promoted: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if self.promoted {
            write!(f, "q")?;
        }
        Ok(())
    }
}
