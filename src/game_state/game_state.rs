//! Authoritative logical state of the tracked game.
//!
//! `GameState` is the single value the rules engine mutates. It holds the
//! board, turn and castling flags, the en-passant target, the game-over flag,
//! the notation history and the undo stack. Callers own it and must not
//! invoke engine operations on it concurrently.

use crate::errors::TrackerError;
use crate::game_state::chess_rules::{back_rank, pawn_start_rank};
use crate::game_state::chess_types::*;
use crate::move_generation::{legal_move_apply, legal_move_checks, legal_move_generator};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub is_game_over: bool,

    // --- History ---
    pub move_history: Vec<String>,
    pub undo_stack: Vec<UndoState>,

    /// Plies played before this state was set up (non-zero only for FEN setups).
    pub ply_offset: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::default(),
            side_to_move: Color::Light,
            castling: CastlingRights::default(),
            en_passant_target: None,
            is_game_over: false,
            move_history: Vec::new(),
            undo_stack: Vec::new(),
            ply_offset: 0,
        }
    }
}

impl GameState {
    /// Empty board, light to move. Mostly useful for building test positions.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut game_state = Self::default();
        for color in [Color::Light, Color::Dark] {
            let home = back_rank(color);
            let pawns = pawn_start_rank(color);
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let file = file as u8;
                game_state
                    .board
                    .set(square_at(home, file), Some(Piece::new(color, *kind)));
                game_state
                    .board
                    .set(square_at(pawns, file), Some(Piece::new(color, PieceKind::Pawn)));
            }
        }
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, TrackerError> {
        parse_fen(fen)
    }

    /// Discard the game in progress and return to the starting position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    // --- Read-only queries ---

    #[inline]
    pub fn fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board_array(&self) -> [[Option<Piece>; 8]; 8] {
        self.board.to_array()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[inline]
    pub fn move_history(&self) -> &[String] {
        &self.move_history
    }

    #[inline]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    // --- Rules engine entry points ---

    #[inline]
    pub fn is_legal(&self, piece: Piece, from: Square, to: Square) -> bool {
        legal_move_generator::is_legal(self, piece, from, to)
    }

    #[inline]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        legal_move_checks::is_king_in_check(&self.board, color)
    }

    #[inline]
    pub fn is_checkmate(&self, color: Color) -> bool {
        legal_move_generator::is_checkmate(self, color)
    }

    #[inline]
    pub fn is_stalemate(&self, color: Color) -> bool {
        legal_move_generator::is_stalemate(self, color)
    }

    #[inline]
    pub fn execute(&mut self, from: Square, to: Square, piece: Piece) -> Result<String, TrackerError> {
        legal_move_apply::execute(self, from, to, piece)
    }

    #[inline]
    pub fn undo(&mut self) -> bool {
        legal_move_apply::undo(self)
    }

    #[inline]
    pub fn override_promotion(&mut self, rank: u8, file: u8, piece_letter: &str) -> Result<(), TrackerError> {
        legal_move_apply::override_promotion(self, rank, file, piece_letter)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_matches_starting_fen() {
        let game = GameState::new_game();
        assert_eq!(game.fen(), STARTING_POSITION_FEN);
        assert_eq!(game.board.king_square(Color::Light), Some(4));
        assert_eq!(game.board.king_square(Color::Dark), Some(60));
        assert_eq!(game.board.pieces_of(Color::Dark).count(), 16);
    }

    #[test]
    fn reset_discards_history_and_undo_stack() {
        let mut game = GameState::new_game();
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        game.execute(square_at(1, 4), square_at(3, 4), pawn)
            .expect("e2e4 should execute");
        assert_eq!(game.undo_depth(), 1);

        game.reset();
        assert_eq!(game, GameState::new_game());
        assert!(game.move_history().is_empty());
        assert_eq!(game.undo_depth(), 0);
    }
}
