//! Pseudo-legal move generation.
//!
//! Generates destinations that follow each piece's movement pattern,
//! path clearance and capture rules without asking whether the mover's own
//! king ends up attacked. The legality filter in `legal.rs` builds on this.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

use super::{Board, Piece, Square};

impl Board {
    /// Destinations the piece on `from` may move to by its movement rules.
    ///
    /// Returned in row-major order. An empty or off-board origin yields no
    /// moves. Squares held by the mover's own color are never included.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> Vec<Square> {
        let Some(mover) = self.piece_at(from) else {
            return Vec::new();
        };
        let mut moves = match mover.piece {
            Piece::Pawn => self.generate_pawn_moves(from, mover.color),
            Piece::Knight => self.generate_knight_moves(from, mover.color),
            Piece::Bishop => self.generate_sliding_moves(from, mover.color, &BISHOP_DIRECTIONS),
            Piece::Rook => self.generate_sliding_moves(from, mover.color, &ROOK_DIRECTIONS),
            Piece::Queen => self.generate_sliding_moves(from, mover.color, &QUEEN_DIRECTIONS),
            Piece::King => self.generate_king_moves(from, mover.color),
        };
        moves.sort_unstable();
        moves
    }

    /// Whether the piece on `from` could move to `to` by its movement rules.
    ///
    /// Agrees with `pseudo_legal_moves(from).contains(&to)` but tests a single
    /// destination directly, which is what attack detection needs.
    #[must_use]
    pub fn can_reach(&self, from: Square, to: Square) -> bool {
        if !to.is_on_board() {
            return false;
        }
        let Some(mover) = self.piece_at(from) else {
            return false;
        };
        let target = self.piece_at(to);
        if target.is_some_and(|t| t.color == mover.color) {
            return false;
        }

        let dr = to.row() as isize - from.row() as isize;
        let dc = to.col() as isize - from.col() as isize;

        match mover.piece {
            Piece::Pawn => {
                let dir = mover.color.pawn_direction();
                if dc == 0 {
                    if target.is_some() {
                        return false;
                    }
                    if dr == dir {
                        return true;
                    }
                    from.row() == mover.color.pawn_home_row()
                        && dr == 2 * dir
                        && from
                            .offset(dir, 0)
                            .is_some_and(|mid| self.is_empty_square(mid))
                } else {
                    dc.abs() == 1 && dr == dir && target.is_some()
                }
            }
            Piece::Knight => {
                (dr.abs() == 2 && dc.abs() == 1) || (dr.abs() == 1 && dc.abs() == 2)
            }
            Piece::Bishop => dr.abs() == dc.abs() && dr != 0 && self.path_clear(from, to),
            Piece::Rook => (dr == 0) != (dc == 0) && self.path_clear(from, to),
            Piece::Queen => {
                let straight = (dr == 0) != (dc == 0);
                let diagonal = dr.abs() == dc.abs() && dr != 0;
                (straight || diagonal) && self.path_clear(from, to)
            }
            Piece::King => dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_knight_and_pawn() {
        let board = Board::new();
        assert_eq!(
            board.pseudo_legal_moves(Square(7, 1)),
            vec![Square(5, 0), Square(5, 2)]
        );
        assert_eq!(
            board.pseudo_legal_moves(Square(6, 4)),
            vec![Square(4, 4), Square(5, 4)]
        );
        assert!(board.pseudo_legal_moves(Square(7, 0)).is_empty());
    }

    #[test]
    fn test_empty_origin_has_no_moves() {
        let board = Board::new();
        assert!(board.pseudo_legal_moves(Square(4, 4)).is_empty());
        assert!(board.pseudo_legal_moves(Square(8, 8)).is_empty());
        assert!(!board.can_reach(Square(4, 4), Square(3, 4)));
    }

    #[test]
    fn test_can_reach_matches_generation_on_start_position() {
        let board = Board::new();
        for from in Square::all() {
            let generated = board.pseudo_legal_moves(from);
            for to in Square::all() {
                assert_eq!(
                    board.can_reach(from, to),
                    generated.contains(&to),
                    "{from} -> {to}"
                );
            }
        }
    }
}
