//! Crate root module declarations for the chess move tracker.
//!
//! The rules engine (`game_state`, `moves`, `move_generation`) keeps the
//! authoritative game, and `correlation` turns visually changed squares into
//! moves on it. Binaries, tests and benches import these stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_geometry;
    pub mod pawn_moves;
    pub mod sliding_moves;
    pub mod step_tables;
}

pub mod move_generation {
    pub mod castling;
    pub mod en_passant;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
}

pub mod correlation {
    pub mod change_correlator;
    pub mod config;
    pub mod noise_filters;
    pub mod touched_square;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_notation;
    pub mod render_game_state;
}
