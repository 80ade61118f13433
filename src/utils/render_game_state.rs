//! Plain-text board renderer for terminal output.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board with rank 8 at the top, FEN letters for pieces and `.`
/// for empty squares.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        let label = char::from(b'1' + rank);
        out.push(label);
        out.push('|');

        for file in 0..8u8 {
            let ch = game_state
                .board
                .get(square_at(rank, file))
                .map_or('.', Piece::fen_char);
            out.push(ch);
            if file < 7 {
                out.push(' ');
            }
        }

        out.push('|');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
