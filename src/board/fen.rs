use super::error::FenError;
use super::{Board, ColoredPiece, Square};

impl Board {
    /// Parse a board from a FEN piece-placement field.
    ///
    /// Only the first whitespace-separated field is read, so a full FEN
    /// string is accepted too; side to move and the other fields are
    /// ignored. The first FEN rank ("8") becomes row 0.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = ColoredPiece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::WrongColumnCount {
                        row,
                        columns: col + 1,
                    });
                }
                board.put(Square(row, col), Some(piece));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::WrongColumnCount { row, columns: col });
            }
        }
        Ok(board)
    }

    /// Parse a board from a FEN piece-placement field.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// FEN piece-placement field for this board.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut out = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.piece_at(Square(row, col)) {
                    Some(p) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(p.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }
        rows.join("/")
    }
}
