use tracing::warn;

use crate::game_state::chess_types::*;
use crate::moves::move_geometry::can_attack;

/// Is `square` attacked by any piece of `attacker_color`?
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| can_attack(board, piece, from, square))
}

/// A board without a king of `color` is treated as "not in check" so the
/// engine stays usable when the camera has lost track of a piece.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        warn!(color = color.name(), "king missing from board; treating as not in check");
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
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
    fn pawns_attack_diagonally_only() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&game.board, sq("d3"), Color::Light));
        assert!(is_square_attacked(&game.board, sq("f3"), Color::Light));
        assert!(!is_square_attacked(&game.board, sq("e3"), Color::Light));
    }

    #[test]
    fn blocked_slider_does_not_give_check() {
        let open = GameState::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&open.board, Color::Dark));

        let blocked = GameState::from_fen("4k3/4p3/8/8/8/8/8/4R1K1 b - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(&blocked.board, Color::Dark));
    }

    #[test]
    fn bishop_checks_along_open_diagonal() {
        let game = GameState::from_fen("4k3/8/8/8/1b6/8/8/R3K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game.board, Color::Light));
        assert!(is_square_attacked(&game.board, sq("a5"), Color::Light));
        assert!(!is_square_attacked(&game.board, sq("b5"), Color::Light));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let board = Board::default();
        assert!(!is_king_in_check(&board, Color::Light));
    }
}
