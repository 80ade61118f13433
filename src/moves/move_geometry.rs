//! Dispatch from piece kind to movement and attack geometry.
//!
//! Geometry answers "can this piece physically get there on this board"; it
//! knows nothing about whose turn it is or whether the king is left in check.

use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_reaches;
use crate::moves::knight_moves::knight_reaches;
use crate::moves::pawn_moves::{pawn_attacks, pawn_push_reaches};
use crate::moves::sliding_moves::{bishop_reaches, queen_reaches, rook_reaches};

/// Pseudo-legal movement check. The destination must be empty or hold an
/// enemy piece. Pawn diagonals require an occupied destination, so en passant
/// is not covered here.
pub fn can_move_geometry(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }

    let target = board.get(to);
    if target.is_some_and(|t| t.color == piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => {
            pawn_push_reaches(board, piece.color, from, to)
                || (target.is_some() && pawn_attacks(piece.color, from, to))
        }
        _ => reaches(board, piece.kind, from, to),
    }
}

/// Attack geometry: identical to movement except pawns never attack forward.
pub fn can_attack(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from, to),
        _ => reaches(board, piece.kind, from, to),
    }
}

fn reaches(board: &Board, kind: PieceKind, from: Square, to: Square) -> bool {
    match kind {
        PieceKind::Knight => knight_reaches(from, to),
        PieceKind::Bishop => bishop_reaches(board, from, to),
        PieceKind::Rook => rook_reaches(board, from, to),
        PieceKind::Queen => queen_reaches(board, from, to),
        PieceKind::King => king_reaches(from, to),
        PieceKind::Pawn => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn pawn_diagonal_needs_a_victim() {
        let game = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);

        assert!(can_move_geometry(&game.board, pawn, sq("e4"), sq("d5")));
        assert!(!can_move_geometry(&game.board, pawn, sq("e4"), sq("f5")));
        assert!(can_attack(&game.board, pawn, sq("e4"), sq("f5")));
        assert!(!can_attack(&game.board, pawn, sq("e4"), sq("e5")));
    }

    #[test]
    fn cannot_land_on_own_piece() {
        let game = GameState::new_game();
        let knight = Piece::new(Color::Light, PieceKind::Knight);
        assert!(!can_move_geometry(&game.board, knight, sq("g1"), sq("e2")));
        assert!(can_move_geometry(&game.board, knight, sq("g1"), sq("f3")));
    }
}
