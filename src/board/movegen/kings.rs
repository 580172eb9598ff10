use super::super::{Board, Color, Square};

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// One step in any direction. Castling is not part of this ruleset.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> Vec<Square> {
        self.generate_step_moves(from, color, &KING_OFFSETS)
    }
}
