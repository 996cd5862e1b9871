//! Core mutable board state.
//!
//! `GameState` is the single position the engine mutates in place. It stores
//! a 64-square mailbox, turn and rights flags, clocks, and a per-color king
//! square cache kept in sync by every board write.

use crate::errors::ChessError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Mailbox game state optimized for in-place apply/revert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Mailbox, indexed by `rank * 8 + file` ---
    pub board: [Option<Piece>; 64],

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // --- Caches ---
    /// `[light, dark]` king squares.
    pub king_squares: [Square; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 64],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_squares: [square_at(4, 0), square_at(4, 7)],
        }
    }
}

impl GameState {
    /// Empty board. Only valid once both kings have been placed.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square as usize]
    }

    /// Place `piece` on `square`, keeping the king cache current.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        if piece.kind == PieceKind::King {
            self.king_squares[piece.color.index()] = square;
        }
        self.board[square as usize] = Some(piece);
    }

    #[inline]
    pub fn clear_square(&mut self, square: Square) {
        self.board[square as usize] = None;
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.board[square as usize].is_none()
    }

    /// True when `square` holds a piece of `color`.
    #[inline]
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        matches!(self.board[square as usize], Some(piece) if piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.board.iter().filter(|square| square.is_some()).count()
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(square, piece)| piece.map(|piece| (square as Square, piece)))
    }

    /// True when each color has exactly one king and the cache points at it.
    pub fn king_cache_is_consistent(&self) -> bool {
        [Color::Light, Color::Dark].into_iter().all(|color| {
            let kings: Vec<Square> = self
                .pieces()
                .filter(|(_, piece)| *piece == Piece::new(color, PieceKind::King))
                .map(|(square, _)| square)
                .collect();
            kings == [self.king_square(color)]
        })
    }

    /// Colors swapped and board flipped vertically; rights and the
    /// en-passant target follow. Evaluates identically for the side to move.
    pub fn mirrored(&self) -> Self {
        let mut out = Self::new_empty();
        for (square, piece) in self.pieces() {
            out.set_piece(
                mirror_square(square),
                Piece::new(piece.color.opposite(), piece.kind),
            );
        }
        out.side_to_move = self.side_to_move.opposite();
        out.castling_rights =
            ((self.castling_rights & 0b0011) << 2) | ((self.castling_rights & 0b1100) >> 2);
        out.en_passant_square = self.en_passant_square.map(mirror_square);
        out.halfmove_clock = self.halfmove_clock;
        out.fullmove_number = self.fullmove_number;
        out
    }
}
