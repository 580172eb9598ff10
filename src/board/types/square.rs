//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (row, column).
///
/// Row 0 is Black's back rank and row 7 is White's; column 0 is the a-file.
/// Ordering is row-major, which is the enumeration order used everywhere
/// moves are listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Returns true if both coordinates lie within the 8x8 board
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Square reached by stepping `(dr, dc)`, or `None` if that leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        Square::new(row, col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square(row, col)))
    }

    /// File letter, 'a' for column 0
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.1 as u8) as char
    }

    /// Displayed rank number (8 - row)
    #[inline]
    #[must_use]
    pub const fn rank_number(self) -> usize {
        8 - self.0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "??");
        }
        write!(f, "{}{}", self.file_char(), self.rank_number())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let col = match chars[0].to_ascii_lowercase() {
            c @ 'a'..='h' => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match chars[1] {
            c @ '1'..='8' => 8 - (c as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}
