use crate::game_state::chess_types::*;

/// Full pre-move copy pushed before every executed move.
///
/// The move history is append-only, so its length at push time is enough to
/// restore it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub is_game_over: bool,
    pub move_history_len: usize,
}

impl UndoState {
    pub fn capture(game_state: &GameState) -> Self {
        Self {
            board: game_state.board,
            side_to_move: game_state.side_to_move,
            castling: game_state.castling,
            en_passant_target: game_state.en_passant_target,
            is_game_over: game_state.is_game_over,
            move_history_len: game_state.move_history.len(),
        }
    }

    /// Overwrite every snapshotted field of `game_state`.
    pub fn restore_into(self, game_state: &mut GameState) {
        game_state.board = self.board;
        game_state.side_to_move = self.side_to_move;
        game_state.castling = self.castling;
        game_state.en_passant_target = self.en_passant_target;
        game_state.is_game_over = self.is_game_over;
        game_state.move_history.truncate(self.move_history_len);
    }
}
