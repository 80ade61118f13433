use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::leaves_king_in_check;
use crate::moves::pawn_moves::pawn_attacks;

/// The enemy pawn removed by an en-passant capture stands on the capturer's
/// rank, on the target's file.
#[inline]
pub const fn en_passant_capture_square(from: Square, target: Square) -> Square {
    square_at(rank_of(from), file_of(target))
}

/// Find a pawn among `candidates` that can capture en passant onto the
/// current target, provided the target square itself was touched.
pub fn find_en_passant(
    game_state: &GameState,
    candidates: &[Square],
    touched: &[Square],
) -> Option<(Square, Square)> {
    let target = game_state.en_passant_target?;
    if !touched.contains(&target) || !game_state.board.is_empty(target) {
        return None;
    }

    let color = game_state.side_to_move;
    let mut scratch = game_state.board;

    candidates.iter().copied().find_map(|from| {
        let piece = game_state.board.get(from)?;
        if piece.color != color || piece.kind != PieceKind::Pawn || !pawn_attacks(color, from, target) {
            return None;
        }

        let victim = en_passant_capture_square(from, target);
        let victim_is_enemy_pawn = game_state
            .board
            .get(victim)
            .is_some_and(|p| p.color != color && p.kind == PieceKind::Pawn);
        if !victim_is_enemy_pawn || leaves_king_in_check(&mut scratch, color, from, target, Some(victim)) {
            return None;
        }

        Some((from, target))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn finds_adjacent_pawn_when_target_touched() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3").expect("FEN should parse");
        let touched = [sq("e5"), sq("d5"), sq("d6")];

        assert_eq!(find_en_passant(&game, &[sq("e5")], &touched), Some((sq("e5"), sq("d6"))));
        assert_eq!(find_en_passant(&game, &[sq("e5")], &[sq("e5"), sq("d5")]), None);
    }

    #[test]
    fn ignores_pawns_that_would_move_backwards() {
        // A light pawn on c7 is diagonally adjacent to d6 but cannot capture backwards.
        let game = GameState::from_fen("4k3/2P5/8/3p4/8/8/8/4K3 w - d6 0 3").expect("FEN should parse");
        assert_eq!(find_en_passant(&game, &[sq("c7")], &[sq("c7"), sq("d6")]), None);
    }

    #[test]
    fn refuses_capture_that_exposes_king() {
        // Capturing exd6 clears the fifth rank between the rook on a5 and the king on h5.
        let game = GameState::from_fen("4k3/8/8/r2pP2K/8/8/8/8 w - d6 0 3").expect("FEN should parse");
        let touched = [sq("e5"), sq("d5"), sq("d6")];
        assert_eq!(find_en_passant(&game, &[sq("e5")], &touched), None);
    }

    #[test]
    fn no_target_means_no_capture() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 3").expect("FEN should parse");
        assert_eq!(find_en_passant(&game, &[sq("e5")], &[sq("e5"), sq("d6")]), None);
    }
}
