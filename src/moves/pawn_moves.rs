use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::*;

/// Forward pushes: one step onto an empty square, or two steps from the start
/// rank when both squares are empty.
pub fn pawn_push_reaches(board: &Board, color: Color, from: Square, to: Square) -> bool {
    if file_of(from) != file_of(to) || !board.is_empty(to) {
        return false;
    }

    let direction = color.pawn_direction();
    let rank_diff = rank_of(to) as i8 - rank_of(from) as i8;

    if rank_diff == direction {
        return true;
    }

    if rank_diff == 2 * direction && rank_of(from) == pawn_start_rank(color) {
        return offset_square(from, direction, 0).is_some_and(|mid| board.is_empty(mid));
    }

    false
}

/// Diagonal capture geometry. Pawns only ever attack this way.
#[inline]
pub fn pawn_attacks(color: Color, from: Square, to: Square) -> bool {
    let rank_diff = rank_of(to) as i8 - rank_of(from) as i8;
    rank_diff == color.pawn_direction() && file_of(from).abs_diff(file_of(to)) == 1
}

#[inline]
pub fn is_double_push(from: Square, to: Square) -> bool {
    file_of(from) == file_of(to) && rank_of(from).abs_diff(rank_of(to)) == 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn double_push_needs_start_rank_and_clear_path() {
        let mut board = Board::default();
        assert!(pawn_push_reaches(&board, Color::Light, sq("e2"), sq("e4")));
        assert!(!pawn_push_reaches(&board, Color::Light, sq("e3"), sq("e5")));

        board.set(sq("e3"), Some(Piece::new(Color::Dark, PieceKind::Knight)));
        assert!(!pawn_push_reaches(&board, Color::Light, sq("e2"), sq("e4")));
        assert!(!pawn_push_reaches(&board, Color::Light, sq("e2"), sq("e3")));
    }

    #[test]
    fn dark_pawns_move_down_the_board() {
        let board = Board::default();
        assert!(pawn_push_reaches(&board, Color::Dark, sq("d7"), sq("d5")));
        assert!(!pawn_push_reaches(&board, Color::Dark, sq("d7"), sq("d8")));
        assert!(pawn_attacks(Color::Dark, sq("d7"), sq("c6")));
        assert!(!pawn_attacks(Color::Dark, sq("d7"), sq("c8")));
    }
}
