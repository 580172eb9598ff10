use super::super::{Board, Color, Square};

impl Board {
    /// Pawn pushes and diagonal captures. No en passant.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::with_capacity(4);
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty_square(one) {
                moves.push(one);
                if from.row() == color.pawn_home_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty_square(two) {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if self.piece_at(target).is_some_and(|p| p.color != color) {
                    moves.push(target);
                }
            }
        }
        moves
    }
}
