use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_name;

/// Export the position as FEN. The halfmove clock is always `0`; the fullmove
/// number is derived from the number of plies played.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = game_state.castling.fen_field();
    let en_passant = game_state
        .en_passant_target
        .map(square_name)
        .unwrap_or_else(|| "-".to_owned());
    let plies = game_state.ply_offset as usize + game_state.move_history.len();

    format!("{board} {side_to_move} {castling} {en_passant} 0 {}", plies / 2 + 1)
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.get(square_at(rank, file)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(generate_fen(&parsed), STARTING_POSITION_FEN);
        assert_eq!(parsed.board, GameState::new_game().board);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R b KQkq - 0 6";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        assert_eq!(generate_fen(&parsed), fen);
    }

    #[test]
    fn fullmove_counts_played_plies() {
        let mut game = GameState::new_game();
        game.move_history.push("e2e4".to_owned());
        assert!(generate_fen(&game).ends_with(" 0 1"));
        game.move_history.push("e7e5".to_owned());
        assert!(generate_fen(&game).ends_with(" 0 2"));
    }
}
