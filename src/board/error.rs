//! Error types for board text parsing.
//!
//! Gameplay never reports errors: an illegal selection is simply ignored.
//! These types only cover turning text into squares and positions.

use std::fmt;

/// Error type for FEN piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Placement string is empty
    Empty,
    /// Invalid piece character in placement string
    InvalidPiece { char: char },
    /// Placement does not describe exactly 8 rows
    WrongRowCount { found: usize },
    /// A row describes more or fewer than 8 columns
    WrongColumnCount { row: usize, columns: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN placement"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongRowCount { found } => {
                write!(f, "FEN placement must have 8 rows, found {found}")
            }
            FenError::WrongColumnCount { row, columns } => {
                write!(f, "Row {row} describes {columns} columns, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
