use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Errors raised while interpreting external input (square names, FEN strings,
/// configuration) or when an operation is asked to act on an impossible board.
///
/// Physical-world outcomes such as sensor noise or an illegal touch are not
/// errors; they are reported through `MoveResult`.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The provided algebraic square could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),
    /// A touched-square confidence score that is not a finite number.
    #[error("invalid confidence score in {0}")]
    InvalidScore(String),
    /// A square index outside `0..=63`.
    #[error("square index out of bounds: {0}")]
    OutOfBounds(u8),
    /// The provided FEN string is invalid or could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    /// Promotion override received a letter other than Q, R, B or N.
    #[error("invalid promotion piece: {0}")]
    InvalidPromotionPiece(String),
    /// Attempted to move a piece that does not exist at the specified square.
    #[error("no piece on from-square {0}")]
    EmptySourceSquare(Square),
    /// Engine refused the call because the game has already ended.
    #[error("game is over")]
    GameOver,
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
