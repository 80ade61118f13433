//! Cheap rejections applied before any rules lookup, and the three-square
//! en-passant/parallax disambiguation.

use std::collections::HashSet;

use crate::correlation::config::CorrelatorConfig;
use crate::correlation::touched_square::TouchedSquare;
use crate::game_state::chess_types::{file_of, rank_of, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseReason {
    TooManySquares(usize),
    ClusterOffBackRanks(usize),
}

/// Only castling touches four or more squares, and castling always touches a
/// back rank. Larger clusters elsewhere, or anything past the hard limit, are
/// sensor noise.
pub fn classify_noise(squares: &[TouchedSquare], config: &CorrelatorConfig) -> Option<NoiseReason> {
    let count = squares.len();

    if count >= config.noise_cluster_size && !squares.iter().any(|t| is_back_rank(t.square)) {
        return Some(NoiseReason::ClusterOffBackRanks(count));
    }
    if count > config.max_touched_squares {
        return Some(NoiseReason::TooManySquares(count));
    }
    None
}

#[inline]
fn is_back_rank(square: Square) -> bool {
    matches!(rank_of(square), 0 | 7)
}

/// An en-passant capture touches the capturer's start square, its diagonal
/// landing square and the captured pawn: exactly two files and two ranks.
pub fn is_en_passant_pattern(squares: &[Square]) -> bool {
    let files: HashSet<u8> = squares.iter().map(|s| file_of(*s)).collect();
    let ranks: HashSet<u8> = squares.iter().map(|s| rank_of(*s)).collect();
    files.len() == 2 && ranks.len() == 2
}

/// With exactly `parallax_cluster_size` squares flagged, keep them all if they
/// look like en passant; otherwise treat the weakest one as a camera ghost and
/// keep the two highest-scoring squares. Ties keep input order. Without any
/// scores there is no weakest square, so the set is returned unchanged.
pub fn resolve_parallax_or_en_passant(
    mut squares: Vec<TouchedSquare>,
    config: &CorrelatorConfig,
) -> Vec<TouchedSquare> {
    if squares.len() != config.parallax_cluster_size {
        return squares;
    }

    let names: Vec<Square> = squares.iter().map(|t| t.square).collect();
    if is_en_passant_pattern(&names) || squares.iter().all(|t| t.score.is_none()) {
        return squares;
    }

    squares.sort_by(|a, b| b.score_or_zero().total_cmp(&a.score_or_zero()));
    squares.truncate(2);
    squares
}
