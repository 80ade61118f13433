use crate::game_state::chess_types::Square;
use crate::moves::step_tables::{generate_step_table, KNIGHT_OFFSETS};

pub const KNIGHT_TARGETS: [u64; 64] = generate_step_table(&KNIGHT_OFFSETS);

/// True when `to` is an L-shape away from `from`. Knights jump, so the board
/// is never consulted.
#[inline]
pub const fn knight_reaches(from: Square, to: Square) -> bool {
    KNIGHT_TARGETS[from as usize] & (1u64 << to) != 0
}

#[cfg(test)]
mod tests {
    use super::{knight_reaches, KNIGHT_TARGETS};

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let d4 = 27u8;
        assert_eq!(KNIGHT_TARGETS[d4 as usize].count_ones(), 8);
        assert!(knight_reaches(d4, 44)); // e6
        assert!(!knight_reaches(d4, 36)); // e5
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        assert_eq!(KNIGHT_TARGETS[0].count_ones(), 2);
    }
}
