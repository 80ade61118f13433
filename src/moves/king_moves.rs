use crate::game_state::chess_types::Square;
use crate::moves::step_tables::{generate_step_table, KING_OFFSETS};

pub const KING_TARGETS: [u64; 64] = generate_step_table(&KING_OFFSETS);

/// One-step king geometry. Castling is handled separately by the engine.
#[inline]
pub const fn king_reaches(from: Square, to: Square) -> bool {
    KING_TARGETS[from as usize] & (1u64 << to) != 0
}

#[cfg(test)]
mod tests {
    use super::{king_reaches, KING_TARGETS};

    #[test]
    fn king_from_a1_has_three_targets() {
        assert_eq!(KING_TARGETS[0].count_ones(), 3);
        assert!(king_reaches(0, 9));
        assert!(!king_reaches(0, 2));
    }
}
