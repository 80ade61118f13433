//! Move notation strings recorded in the history and returned to callers.
//!
//! Format: `<from><to>` in lowercase coordinates, then `Q` for an automatic
//! queen promotion, ` (EP)` for en passant, ` (0-0)` / ` (0-0-0)` for
//! castling, and finally `#` on checkmate or ` (Stalemate)` on stalemate.

use crate::game_state::chess_types::Square;
use crate::utils::algebraic::square_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMove {
    None,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Ongoing,
    Checkmate,
    Stalemate,
}

pub fn format_move(
    from: Square,
    to: Square,
    promoted: bool,
    special: SpecialMove,
    ending: GameEnding,
) -> String {
    let mut out = square_name(from);
    out.push_str(&square_name(to));

    if promoted {
        out.push('Q');
    }

    match special {
        SpecialMove::None => {}
        SpecialMove::EnPassant => out.push_str(" (EP)"),
        SpecialMove::CastleKingside => out.push_str(" (0-0)"),
        SpecialMove::CastleQueenside => out.push_str(" (0-0-0)"),
    }

    match ending {
        GameEnding::Ongoing => {}
        GameEnding::Checkmate => out.push('#'),
        GameEnding::Stalemate => out.push_str(" (Stalemate)"),
    }

    out
}
