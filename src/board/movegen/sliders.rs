use super::super::{Board, Color, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Walk each ray until the edge or the first piece; an enemy piece ends
    /// the ray as a capture, an own piece ends it exclusively.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                match self.piece_at(next) {
                    None => moves.push(next),
                    Some(p) => {
                        if p.color != color {
                            moves.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        moves
    }

    /// True if every square strictly between `from` and `to` is empty.
    ///
    /// Only meaningful for squares sharing a row, column or diagonal.
    pub(crate) fn path_clear(&self, from: Square, to: Square) -> bool {
        let dr = (to.row() as isize - from.row() as isize).signum();
        let dc = (to.col() as isize - from.col() as isize).signum();
        if (dr, dc) == (0, 0) {
            return false;
        }

        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            if next == to {
                return true;
            }
            if !self.is_empty_square(next) {
                return false;
            }
            current = next;
        }
        false
    }
}
