//! Core value types shared by the rules engine and the change correlator.
//!
//! The board is a plain 64-cell mailbox indexed `rank * 8 + file` (`0 == a1`,
//! `63 == h8`). Rank 0 belongs to `Color::Light`, the side that moves first.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank delta of a forward pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "White",
            Color::Dark => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase FEN letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for light, lowercase for dark.
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::Light => base.to_ascii_uppercase(),
            Color::Dark => base,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_fen_char(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Some(Self { color, kind })
    }
}

/// Board square index (`0..=63`).
pub type Square = u8;

#[inline]
pub const fn square_at(rank: u8, file: u8) -> Square {
    rank * 8 + file
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

/// Offset a square by a rank/file delta, returning `None` off the board.
#[inline]
pub fn offset_square(square: Square, rank_delta: i8, file_delta: i8) -> Option<Square> {
    let rank = rank_of(square) as i8 + rank_delta;
    let file = file_of(square) as i8 + file_delta;
    if (0..8).contains(&rank) && (0..8).contains(&file) {
        Some(square_at(rank as u8, file as u8))
    } else {
        None
    }
}

/// 8x8 mailbox board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: [None; 64] }
    }
}

impl Board {
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square as usize] = piece;
    }

    /// Remove and return whatever stands on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square as usize].is_none()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Iterate over every `(square, piece)` belonging to `color`, a1 first.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| match cell {
                Some(piece) if piece.color == color => Some((idx as Square, *piece)),
                _ => None,
            })
    }

    /// Rank-major copy for read-only consumers: `array[rank][file]`.
    pub fn to_array(&self) -> [[Option<Piece>; 8]; 8] {
        let mut out = [[None; 8]; 8];
        for (idx, cell) in self.cells.iter().enumerate() {
            out[idx / 8][idx % 8] = *cell;
        }
        out
    }
}

/// Castling bookkeeping stored as "has moved" flags; rights are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingRights {
    pub light_king_moved: bool,
    pub light_rook_a_moved: bool,
    pub light_rook_h_moved: bool,
    pub dark_king_moved: bool,
    pub dark_rook_a_moved: bool,
    pub dark_rook_h_moved: bool,
}

impl CastlingRights {
    pub fn can_castle_kingside(&self, color: Color) -> bool {
        match color {
            Color::Light => !self.light_king_moved && !self.light_rook_h_moved,
            Color::Dark => !self.dark_king_moved && !self.dark_rook_h_moved,
        }
    }

    pub fn can_castle_queenside(&self, color: Color) -> bool {
        match color {
            Color::Light => !self.light_king_moved && !self.light_rook_a_moved,
            Color::Dark => !self.dark_king_moved && !self.dark_rook_a_moved,
        }
    }

    pub fn mark_king_moved(&mut self, color: Color) {
        match color {
            Color::Light => self.light_king_moved = true,
            Color::Dark => self.dark_king_moved = true,
        }
    }

    /// Flag the rook that starts on `square`, if `square` is a rook home square.
    pub fn mark_rook_home_vacated(&mut self, square: Square) {
        match square {
            0 => self.light_rook_a_moved = true,
            7 => self.light_rook_h_moved = true,
            56 => self.dark_rook_a_moved = true,
            63 => self.dark_rook_h_moved = true,
            _ => {}
        }
    }

    /// FEN castling token (`KQkq` subset or `-`).
    pub fn fen_field(&self) -> String {
        let mut out = String::new();
        if self.can_castle_kingside(Color::Light) {
            out.push('K');
        }
        if self.can_castle_queenside(Color::Light) {
            out.push('Q');
        }
        if self.can_castle_kingside(Color::Dark) {
            out.push('k');
        }
        if self.can_castle_queenside(Color::Dark) {
            out.push('q');
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }
}
