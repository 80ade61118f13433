//! Line geometry shared by bishops, rooks and queens.

use crate::game_state::chess_types::*;

#[inline]
pub fn is_orthogonal(from: Square, to: Square) -> bool {
    from != to && (rank_of(from) == rank_of(to) || file_of(from) == file_of(to))
}

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    from != to && rank_of(from).abs_diff(rank_of(to)) == file_of(from).abs_diff(file_of(to))
}

/// Walk the straight or diagonal line from `from` to `to`, excluding both
/// endpoints. Any occupied intermediate square blocks the line.
///
/// Callers must only pass squares that share a rank, file or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let rank_step = (rank_of(to) as i8 - rank_of(from) as i8).signum();
    let file_step = (file_of(to) as i8 - file_of(from) as i8).signum();

    let mut current = from;
    loop {
        let Some(next) = offset_square(current, rank_step, file_step) else {
            return false;
        };
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
}

pub fn bishop_reaches(board: &Board, from: Square, to: Square) -> bool {
    is_diagonal(from, to) && is_path_clear(board, from, to)
}

pub fn rook_reaches(board: &Board, from: Square, to: Square) -> bool {
    is_orthogonal(from, to) && is_path_clear(board, from, to)
}

pub fn queen_reaches(board: &Board, from: Square, to: Square) -> bool {
    (is_orthogonal(from, to) || is_diagonal(from, to)) && is_path_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn rook_is_blocked_by_intermediate_piece() {
        let mut board = Board::default();
        board.set(sq("a4"), Some(Piece::new(Color::Dark, PieceKind::Pawn)));

        assert!(rook_reaches(&board, sq("a1"), sq("a4")));
        assert!(!rook_reaches(&board, sq("a1"), sq("a8")));
        assert!(rook_reaches(&board, sq("a1"), sq("h1")));
    }

    #[test]
    fn bishop_requires_true_diagonal() {
        let board = Board::default();
        assert!(bishop_reaches(&board, sq("c1"), sq("h6")));
        assert!(!bishop_reaches(&board, sq("c1"), sq("h5")));
        assert!(!bishop_reaches(&board, sq("c1"), sq("c1")));
    }

    #[test]
    fn queen_combines_both_lines() {
        let mut board = Board::default();
        board.set(sq("e5"), Some(Piece::new(Color::Light, PieceKind::Pawn)));

        assert!(queen_reaches(&board, sq("d1"), sq("d8")));
        assert!(queen_reaches(&board, sq("d1"), sq("h5")));
        assert!(!queen_reaches(&board, sq("c3"), sq("f6")));
        assert!(!queen_reaches(&board, sq("d1"), sq("e3")));
    }
}
