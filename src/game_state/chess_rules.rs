//! Canonical chess-rule constants.
//!
//! Starting position, per-color rank landmarks, and the fixed squares used by
//! castling on an orthodox 8x8 board.

use crate::game_state::chess_types::{square_at, Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_START_FILE: u8 = 4;
pub const ROOK_A_FILE: u8 = 0;
pub const ROOK_H_FILE: u8 = 7;
pub const KINGSIDE_KING_TARGET_FILE: u8 = 6;
pub const KINGSIDE_ROOK_TARGET_FILE: u8 = 5;
pub const QUEENSIDE_KING_TARGET_FILE: u8 = 2;
pub const QUEENSIDE_ROOK_TARGET_FILE: u8 = 3;

#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// The rank on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    back_rank(color.opposite())
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

#[inline]
pub const fn king_start_square(color: Color) -> Square {
    square_at(back_rank(color), KING_START_FILE)
}
