//! FEN-to-GameState parser.
//!
//! Used to set up arbitrary positions (tests, benchmarks, resuming a game).
//! The halfmove clock is validated but not stored since the tracker always
//! reports it as zero.

use crate::errors::TrackerError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

fn invalid(reason: impl Into<String>) -> TrackerError {
    TrackerError::InvalidFen(reason.into())
}

pub fn parse_fen(fen: &str) -> Result<GameState, TrackerError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state.board)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;

    halfmove_part
        .parse::<u32>()
        .map_err(|_| invalid(format!("halfmove clock {halfmove_part}")))?;
    let fullmove = fullmove_part
        .parse::<u32>()
        .map_err(|_| invalid(format!("fullmove number {fullmove_part}")))?;

    let dark_to_move = u32::from(game_state.side_to_move == Color::Dark);
    game_state.ply_offset = fullmove
        .saturating_sub(1)
        .checked_mul(2)
        .and_then(|plies| plies.checked_add(dark_to_move))
        .ok_or_else(|| invalid(format!("fullmove number {fullmove_part} is out of range")))?;

    for color in [Color::Light, Color::Dark] {
        let kings = game_state
            .board
            .pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(invalid(format!("{} must have exactly one king, found {kings}", color.name())));
        }
    }

    Ok(game_state)
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), TrackerError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            board.set(square_at(board_rank, file), Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, TrackerError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(format!("side-to-move field {side_part}"))),
    }
}

/// Rights are stored as "moved" flags: a missing letter marks its rook as moved,
/// and a side with no letters at all has moved its king.
fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, TrackerError> {
    let (mut k, mut q, mut dk, mut dq) = (false, false, false, false);

    if castling_part != "-" {
        for ch in castling_part.chars() {
            match ch {
                'K' => k = true,
                'Q' => q = true,
                'k' => dk = true,
                'q' => dq = true,
                _ => return Err(invalid(format!("castling rights character {ch}"))),
            }
        }
    }

    Ok(CastlingRights {
        light_king_moved: !k && !q,
        light_rook_a_moved: !q,
        light_rook_h_moved: !k,
        dark_king_moved: !dk && !dq,
        dark_rook_a_moved: !dq,
        dark_rook_h_moved: !dk,
    })
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, TrackerError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::TrackerError;
    use crate::game_state::chess_types::*;

    #[test]
    fn parses_rights_and_en_passant() {
        let game = parse_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w Kq d6 0 3").expect("FEN should parse");

        assert_eq!(game.side_to_move, Color::Light);
        assert!(game.castling.can_castle_kingside(Color::Light));
        assert!(!game.castling.can_castle_queenside(Color::Light));
        assert!(!game.castling.can_castle_kingside(Color::Dark));
        assert!(game.castling.can_castle_queenside(Color::Dark));
        assert_eq!(game.en_passant_target, Some(43));
        assert_eq!(game.ply_offset, 4);
    }

    #[test]
    fn rejects_positions_without_both_kings() {
        assert!(parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K2X w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/4K3 w - - 0 1").is_err());
    }

    #[test]
    fn rejects_fullmove_numbers_too_large_to_count_plies() {
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 4294967295"),
            Err(TrackerError::InvalidFen(_))
        ));
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 2147483649").is_err());

        let late = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 2147483648").expect("largest fullmove should parse");
        assert_eq!(late.ply_offset, u32::MAX);
    }
}
