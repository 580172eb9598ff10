use super::{Board, Color, Square};

impl Board {
    /// Whether the king of `color` is attacked by any opposing piece.
    ///
    /// Independent of whose turn it is. A board without a king of that color
    /// is reported as not in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.find_king(color) else {
            crate::log_warn!("no {} king on board {}; treating as not in check", color, self.to_fen());
            return false;
        };
        self.is_attacked_by(king_sq, color.opponent())
    }

    /// Whether some piece of `attacker` can pseudo-legally move onto `target`.
    #[must_use]
    pub fn is_attacked_by(&self, target: Square, attacker: Color) -> bool {
        self.squares_of(attacker)
            .any(|from| self.can_reach(from, target))
    }
}
