//! Legality, checkmate and stalemate.
//!
//! Every candidate is tried on a scratch board with `HypotheticalMove`, which
//! records the touched cells and puts them back once the king-safety test has
//! run.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::en_passant::en_passant_capture_square;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::move_geometry::can_move_geometry;
use crate::moves::pawn_moves::pawn_attacks;

/// A move applied to a board that remembers how to take itself back.
pub struct HypotheticalMove<'a> {
    board: &'a mut Board,
    saved: [(Square, Option<Piece>); 3],
    len: usize,
}

impl<'a> HypotheticalMove<'a> {
    pub fn apply(board: &'a mut Board, from: Square, to: Square, captured: Option<Square>) -> Self {
        let mut saved = [(from, board.get(from)), (to, board.get(to)), (to, None)];
        let mut len = 2;
        if let Some(extra) = captured {
            saved[2] = (extra, board.get(extra));
            len = 3;
            board.set(extra, None);
        }

        let moving = board.take(from);
        board.set(to, moving);

        Self { board, saved, len }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &*self.board
    }
}

impl Drop for HypotheticalMove<'_> {
    fn drop(&mut self) {
        for (square, piece) in self.saved[..self.len].iter().rev() {
            self.board.set(*square, *piece);
        }
    }
}

/// Would moving `from -> to` (optionally removing `captured`) leave `color`'s
/// king attacked?
pub fn leaves_king_in_check(
    board: &mut Board,
    color: Color,
    from: Square,
    to: Square,
    captured: Option<Square>,
) -> bool {
    let trial = HypotheticalMove::apply(board, from, to, captured);
    is_king_in_check(trial.board(), color)
}

/// Legality of an ordinary move or capture for the side to move. Castling and
/// en passant have their own entry points.
pub fn is_legal(game_state: &GameState, piece: Piece, from: Square, to: Square) -> bool {
    if piece.color != game_state.side_to_move || game_state.board.get(from) != Some(piece) {
        return false;
    }

    if !can_move_geometry(&game_state.board, piece, from, to) {
        return false;
    }

    let mut scratch = game_state.board;
    !leaves_king_in_check(&mut scratch, piece.color, from, to, None)
}

/// Every legal `(from, to)` pair for the side to move, including en-passant
/// captures. Castling is excluded.
pub fn legal_moves(game_state: &GameState) -> Vec<(Square, Square)> {
    let mut out = Vec::new();
    for_each_legal_move(game_state, game_state.side_to_move, |from, to| {
        out.push((from, to));
        true
    });
    out
}

pub fn has_legal_moves(game_state: &GameState, color: Color) -> bool {
    let mut found = false;
    for_each_legal_move(game_state, color, |_, _| {
        found = true;
        false
    });
    found
}

/// In check, and no simulated move of any piece resolves it.
pub fn is_checkmate(game_state: &GameState, color: Color) -> bool {
    is_king_in_check(&game_state.board, color) && !has_legal_moves(game_state, color)
}

/// Not in check, yet no legal move exists.
pub fn is_stalemate(game_state: &GameState, color: Color) -> bool {
    !is_king_in_check(&game_state.board, color) && !has_legal_moves(game_state, color)
}

/// Visit legal moves of `color` until `visit` returns `false`.
fn for_each_legal_move<F>(game_state: &GameState, color: Color, mut visit: F)
where
    F: FnMut(Square, Square) -> bool,
{
    let board = &game_state.board;
    let mut scratch = *board;

    for (from, piece) in board.pieces_of(color) {
        for to in 0..64u8 {
            if can_move_geometry(board, piece, from, to)
                && !leaves_king_in_check(&mut scratch, color, from, to, None)
                && !visit(from, to)
            {
                return;
            }
        }

        if piece.kind != PieceKind::Pawn {
            continue;
        }
        let Some(target) = game_state.en_passant_target else {
            continue;
        };
        if !pawn_attacks(color, from, target) || !board.is_empty(target) {
            continue;
        }
        let victim = en_passant_capture_square(from, target);
        let is_enemy_pawn = board
            .get(victim)
            .is_some_and(|p| p.color != color && p.kind == PieceKind::Pawn);
        if is_enemy_pawn
            && !leaves_king_in_check(&mut scratch, color, from, target, Some(victim))
            && !visit(from, target)
        {
            return;
        }
    }
}
