//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and internal
//! square indices. Parsing is case-insensitive because the vision layer
//! reports squares as `E4`.

use crate::errors::TrackerError;
use crate::game_state::chess_types::{file_of, rank_of, square_at, Square};

/// Convert algebraic notation (for example: "e4" or "E4") to a square index.
pub fn algebraic_to_square(square: &str) -> Result<Square, TrackerError> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(TrackerError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(TrackerError::InvalidAlgebraic(square.to_owned()));
    }

    Ok(square_at(rank - b'1', file - b'a'))
}

/// Name of a square already known to be on the board (for example: "e4").
pub(crate) fn square_name(square: Square) -> String {
    let file_char = char::from(b'a' + file_of(square) % 8);
    let rank_char = char::from(b'1' + rank_of(square) % 8);
    format!("{file_char}{rank_char}")
}
