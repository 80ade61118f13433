//! State-mutating side of the rules engine: execute, undo, promotion override.

use tracing::{info, warn};

use crate::errors::TrackerError;
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::{chess_types::*, game_state::GameState, undo_state::UndoState};
use crate::move_generation::en_passant::en_passant_capture_square;
use crate::move_generation::legal_move_generator::{is_checkmate, is_stalemate};
use crate::moves::pawn_moves::is_double_push;
use crate::utils::move_notation::{format_move, GameEnding, SpecialMove};

/// Execute a move the caller has already validated and return its notation.
///
/// Pushes a full pre-move snapshot, then: removes an en-passant victim, sets
/// or clears the en-passant target, auto-promotes to a queen, moves the piece,
/// updates castling flags, flips the turn and evaluates mate/stalemate for the
/// new side to move.
pub fn execute(game_state: &mut GameState, from: Square, to: Square, piece: Piece) -> Result<String, TrackerError> {
    if game_state.is_game_over {
        return Err(TrackerError::GameOver);
    }
    if game_state.board.is_empty(from) {
        return Err(TrackerError::EmptySourceSquare(from));
    }

    game_state.undo_stack.push(UndoState::capture(game_state));

    let is_pawn = piece.kind == PieceKind::Pawn;
    let captured = game_state.board.get(to);

    let special = if is_pawn && file_of(from) != file_of(to) && captured.is_none() {
        game_state.board.set(en_passant_capture_square(from, to), None);
        SpecialMove::EnPassant
    } else {
        SpecialMove::None
    };

    game_state.en_passant_target = if is_pawn && is_double_push(from, to) {
        Some(square_at((rank_of(from) + rank_of(to)) / 2, file_of(from)))
    } else {
        None
    };

    let promoted = is_pawn && rank_of(to) == promotion_rank(piece.color);
    let placed = if promoted {
        Piece::new(piece.color, PieceKind::Queen)
    } else {
        piece
    };

    game_state.board.take(from);
    game_state.board.set(to, Some(placed));

    match piece.kind {
        PieceKind::King => game_state.castling.mark_king_moved(piece.color),
        PieceKind::Rook => game_state.castling.mark_rook_home_vacated(from),
        _ => {}
    }
    if captured.is_some() {
        game_state.castling.mark_rook_home_vacated(to);
    }

    game_state.side_to_move = piece.color.opposite();

    Ok(finish_move(game_state, from, to, promoted, special))
}

/// Shared tail of every executed move: mate/stalemate detection for the side
/// now to move, notation, and history.
pub(crate) fn finish_move(
    game_state: &mut GameState,
    from: Square,
    to: Square,
    promoted: bool,
    special: SpecialMove,
) -> String {
    let to_move = game_state.side_to_move;

    let ending = if is_checkmate(game_state, to_move) {
        info!(winner = to_move.opposite().name(), "checkmate");
        GameEnding::Checkmate
    } else if is_stalemate(game_state, to_move) {
        info!("stalemate, the game is drawn");
        GameEnding::Stalemate
    } else {
        GameEnding::Ongoing
    };
    game_state.is_game_over = ending != GameEnding::Ongoing;

    let notation = format_move(from, to, promoted, special, ending);
    game_state.move_history.push(notation.clone());
    notation
}

/// Restore the most recent snapshot. Returns `false` when there is nothing to undo.
pub fn undo(game_state: &mut GameState) -> bool {
    let Some(previous) = game_state.undo_stack.pop() else {
        warn!("undo requested with empty history");
        return false;
    };

    previous.restore_into(game_state);
    info!(side_to_move = game_state.side_to_move.name(), "undo applied");
    true
}

/// Replace the piece on a promotion square with the classifier's verdict.
///
/// The color follows the rank: rank 7 holds a light piece, rank 0 a dark one.
/// Any other rank is ignored. Turn, history and undo state are untouched.
pub fn override_promotion(
    game_state: &mut GameState,
    rank: u8,
    file: u8,
    piece_letter: &str,
) -> Result<(), TrackerError> {
    let kind = match piece_letter.trim().to_ascii_uppercase().as_str() {
        "Q" => PieceKind::Queen,
        "R" => PieceKind::Rook,
        "B" => PieceKind::Bishop,
        "N" => PieceKind::Knight,
        _ => return Err(TrackerError::InvalidPromotionPiece(piece_letter.to_owned())),
    };
    if rank > 7 || file > 7 {
        return Err(TrackerError::OutOfBounds(rank.saturating_mul(8).saturating_add(file)));
    }

    let color = match rank {
        7 => Color::Light,
        0 => Color::Dark,
        _ => {
            warn!(rank, file, "promotion override ignored off the back ranks");
            return Ok(());
        }
    };

    game_state.board.set(square_at(rank, file), Some(Piece::new(color, kind)));
    info!(rank, file, piece = piece_letter, "promotion override applied");
    Ok(())
}
