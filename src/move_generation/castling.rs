//! Castling detection and execution from a touched-square set.
//!
//! A castle is recognised when the king's start square and one of its landing
//! squares (g- or c-file on the mover's back rank) were both touched. The king
//! may not be in check, pass through an attacked square, or land on one.

use tracing::debug;

use crate::game_state::chess_rules::*;
use crate::game_state::{chess_types::*, game_state::GameState, undo_state::UndoState};
use crate::move_generation::legal_move_apply::finish_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::utils::move_notation::SpecialMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    const fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => ROOK_H_FILE,
            CastleSide::Queenside => ROOK_A_FILE,
        }
    }

    const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_KING_TARGET_FILE,
            CastleSide::Queenside => QUEENSIDE_KING_TARGET_FILE,
        }
    }

    const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_ROOK_TARGET_FILE,
            CastleSide::Queenside => QUEENSIDE_ROOK_TARGET_FILE,
        }
    }

    fn special(self) -> SpecialMove {
        match self {
            CastleSide::Kingside => SpecialMove::CastleKingside,
            CastleSide::Queenside => SpecialMove::CastleQueenside,
        }
    }
}

/// Check every castling precondition for the side to move without mutating.
pub fn can_castle(game_state: &GameState, side: CastleSide) -> bool {
    let color = game_state.side_to_move;
    let rank = back_rank(color);
    let board = &game_state.board;
    let enemy = color.opposite();

    let rights = match side {
        CastleSide::Kingside => game_state.castling.can_castle_kingside(color),
        CastleSide::Queenside => game_state.castling.can_castle_queenside(color),
    };
    if !rights {
        return false;
    }

    if board.get(king_start_square(color)) != Some(Piece::new(color, PieceKind::King))
        || board.get(square_at(rank, side.rook_file())) != Some(Piece::new(color, PieceKind::Rook))
    {
        return false;
    }

    let (low, high) = match side {
        CastleSide::Kingside => (KING_START_FILE + 1, ROOK_H_FILE),
        CastleSide::Queenside => (ROOK_A_FILE + 1, KING_START_FILE),
    };
    if (low..high).any(|file| !board.is_empty(square_at(rank, file))) {
        return false;
    }

    if is_king_in_check(board, color) {
        return false;
    }

    // Transit and landing squares only; b1/b8 may be attacked on the long side.
    let transit = square_at(rank, side.rook_target_file());
    let landing = square_at(rank, side.king_target_file());
    !is_square_attacked(board, transit, enemy) && !is_square_attacked(board, landing, enemy)
}

/// Try to read `touched` as a castle for the side to move and execute it.
/// Returns the notation on success and leaves the state untouched otherwise.
pub fn try_castle(game_state: &mut GameState, touched: &[Square]) -> Option<String> {
    if game_state.is_game_over {
        return None;
    }

    let color = game_state.side_to_move;
    let rank = back_rank(color);
    let king_from = king_start_square(color);
    if !touched.contains(&king_from) {
        return None;
    }

    let side = [CastleSide::Kingside, CastleSide::Queenside]
        .into_iter()
        .filter(|side| touched.contains(&square_at(rank, side.king_target_file())))
        .find(|side| can_castle(game_state, *side))?;

    debug!(?side, color = color.name(), "castling recognised");
    Some(execute_castle(game_state, side))
}

fn execute_castle(game_state: &mut GameState, side: CastleSide) -> String {
    game_state.undo_stack.push(UndoState::capture(game_state));

    let color = game_state.side_to_move;
    let rank = back_rank(color);
    let king_from = king_start_square(color);
    let king_to = square_at(rank, side.king_target_file());
    let rook_from = square_at(rank, side.rook_file());
    let rook_to = square_at(rank, side.rook_target_file());

    let king = game_state.board.take(king_from);
    let rook = game_state.board.take(rook_from);
    game_state.board.set(king_to, king);
    game_state.board.set(rook_to, rook);

    game_state.castling.mark_king_moved(color);
    game_state.castling.mark_rook_home_vacated(rook_from);
    game_state.en_passant_target = None;
    game_state.side_to_move = color.opposite();

    finish_move(game_state, king_from, king_to, false, side.special())
}
