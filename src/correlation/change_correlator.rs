//! Turns a noisy list of changed squares into a recognised move.
//!
//! The search order is castling, ordinary moves and captures, then en
//! passant. The first match is executed on the `GameState`. A touched piece of
//! the side to move with no legal destination yields `Illegal`; anything else
//! is `Noise`. Only `Valid` mutates the state, so callers keep their baseline
//! image on every other outcome.

use tracing::{debug, info, warn};

use crate::correlation::config::CorrelatorConfig;
use crate::correlation::noise_filters::{classify_noise, resolve_parallax_or_en_passant};
use crate::correlation::touched_square::{parse_touched_squares, TouchedSquare};
use crate::errors::TrackerError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::castling::try_castle;
use crate::move_generation::en_passant::find_en_passant;
use crate::move_generation::legal_move_apply::execute;
use crate::utils::algebraic::square_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// Nothing changed.
    None,
    /// A move was executed; the state advanced by exactly one ply.
    Valid { notation: String },
    /// A piece of the side to move was disturbed but no legal move matches.
    /// The physical board needs correcting.
    Illegal { square: Square, reason: String },
    /// The change pattern does not resemble any move.
    Noise,
}

impl MoveResult {
    pub fn notation(&self) -> Option<&str> {
        match self {
            MoveResult::Valid { notation } => Some(notation),
            _ => None,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, MoveResult::Valid { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChangeCorrelator {
    config: CorrelatorConfig,
}

impl ChangeCorrelator {
    pub fn new(config: CorrelatorConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &CorrelatorConfig {
        &self.config
    }

    /// Parse camera-space square names (optionally `name:score`) and correlate.
    pub fn correlate_names<S: AsRef<str>>(
        &self,
        game_state: &mut GameState,
        names: &[S],
    ) -> Result<MoveResult, TrackerError> {
        let touched = parse_touched_squares(names, self.config.orientation)?;
        Ok(self.correlate(game_state, &touched))
    }

    /// Correlate squares already expressed in logical board coordinates.
    pub fn correlate(&self, game_state: &mut GameState, touched: &[TouchedSquare]) -> MoveResult {
        if game_state.is_game_over {
            debug!("game is over; ignoring changes");
            return MoveResult::Noise;
        }

        if touched.is_empty() {
            return MoveResult::None;
        }

        let touched = dedup_keep_strongest(touched);

        if let Some(reason) = classify_noise(&touched, &self.config) {
            debug!(?reason, "discarding change set");
            return MoveResult::Noise;
        }

        let touched = if self.config.resolve_parallax {
            resolve_parallax_or_en_passant(touched, &self.config)
        } else {
            touched
        };
        let squares: Vec<Square> = touched.iter().map(|t| t.square).collect();

        if let Some(notation) = try_castle(game_state, &squares) {
            info!(%notation, "castling detected");
            return MoveResult::Valid { notation };
        }

        let side = game_state.side_to_move;
        let candidates: Vec<Square> = squares
            .iter()
            .copied()
            .filter(|s| game_state.board.get(*s).is_some_and(|p| p.color == side))
            .collect();

        for &from in &candidates {
            for &to in &squares {
                if from == to {
                    continue;
                }
                let Some(piece) = game_state.board.get(from) else {
                    continue;
                };
                if game_state.is_legal(piece, from, to) {
                    return self.run(game_state, from, to, piece);
                }
            }
        }

        if let Some((from, to)) = find_en_passant(game_state, &candidates, &squares) {
            if let Some(piece) = game_state.board.get(from) {
                return self.run(game_state, from, to, piece);
            }
        }

        if let Some(&square) = candidates.first() {
            let reason = format!("Touched {} but move was invalid.", square_name(square));
            warn!(square = %square_name(square), "illegal move on the physical board");
            return MoveResult::Illegal { square, reason };
        }

        debug!(count = squares.len(), "no move signature matched");
        MoveResult::Noise
    }

    fn run(&self, game_state: &mut GameState, from: Square, to: Square, piece: Piece) -> MoveResult {
        match execute(game_state, from, to, piece) {
            Ok(notation) => {
                info!(%notation, fen = %game_state.fen(), "move confirmed");
                MoveResult::Valid { notation }
            }
            Err(err) => {
                warn!(%err, "move execution refused");
                MoveResult::Noise
            }
        }
    }
}

/// The vision layer occasionally reports a square twice; keep one entry per
/// square with its highest score, in first-seen order.
fn dedup_keep_strongest(touched: &[TouchedSquare]) -> Vec<TouchedSquare> {
    let mut out: Vec<TouchedSquare> = Vec::with_capacity(touched.len());
    for t in touched {
        match out.iter_mut().find(|existing| existing.square == t.square) {
            Some(existing) => {
                if t.score_or_zero() > existing.score_or_zero() {
                    existing.score = t.score;
                }
            }
            None => out.push(*t),
        }
    }
    out
}
