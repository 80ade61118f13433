//! Precomputed destination masks for the fixed-step pieces.
//!
//! Bit `n` of `table[from]` is set when square `n` is one step away from
//! `from`. Sliding pieces do not use these tables.

pub type StepOffsets = [(i8, i8); 8];

pub const KNIGHT_OFFSETS: StepOffsets = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const KING_OFFSETS: StepOffsets = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const fn generate_step_table(offsets: &StepOffsets) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut mask = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let r = rank + offsets[i].0;
            let f = file + offsets[i].1;
            if r >= 0 && r < 8 && f >= 0 && f < 8 {
                mask |= 1u64 << ((r as usize) * 8 + (f as usize));
            }
            i += 1;
        }

        table[sq] = mask;
        sq += 1;
    }

    table
}
