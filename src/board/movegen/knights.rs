use super::super::{Board, Color, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> Vec<Square> {
        self.generate_step_moves(from, color, &KNIGHT_OFFSETS)
    }

    /// Single-step targets for leapers: any on-board offset not held by `color`.
    pub(crate) fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
    ) -> Vec<Square> {
        offsets
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| self.piece_at(to).map_or(true, |p| p.color != color))
            .collect()
    }
}
