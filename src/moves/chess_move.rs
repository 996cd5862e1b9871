//! Move record produced by generation and consumed by apply/revert.
//!
//! Besides origin, destination and pieces, a move carries the castling
//! rights, en-passant target and halfmove clock that held immediately before
//! it was played, so reverting never recomputes them.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::utils::long_algebraic::move_to_long_algebraic;

pub const FLAG_EN_PASSANT: u8 = 1 << 0;
pub const FLAG_CASTLE_KINGSIDE: u8 = 1 << 1;
pub const FLAG_CASTLE_QUEENSIDE: u8 = 1 << 2;
pub const FLAG_DOUBLE_PAWN_PUSH: u8 = 1 << 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub moved_piece: PieceKind,
    /// Piece removed by the move. Set for en-passant too (always a pawn).
    pub captured_piece: Option<PieceKind>,
    pub promotion_piece: Option<PieceKind>,
    pub flags: u8,

    // --- Pre-move snapshot ---
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
}

impl ChessMove {
    /// Build a move for the side to move in `game_state`, snapshotting its
    /// restorable fields.
    #[inline]
    pub fn new(
        game_state: &GameState,
        from: Square,
        to: Square,
        moved_piece: PieceKind,
        captured_piece: Option<PieceKind>,
        promotion_piece: Option<PieceKind>,
        flags: u8,
    ) -> Self {
        Self {
            from,
            to,
            moved_piece,
            captured_piece,
            promotion_piece,
            flags,
            prev_castling_rights: game_state.castling_rights,
            prev_en_passant_square: game_state.en_passant_square,
            prev_halfmove_clock: game_state.halfmove_clock,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.flags & FLAG_DOUBLE_PAWN_PUSH != 0
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.flags & (FLAG_CASTLE_KINGSIDE | FLAG_CASTLE_QUEENSIDE) != 0
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion_piece.is_some()
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_victim_square(&self) -> Square {
        square_at(file_of(self.to), rank_of(self.from))
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(self))
    }
}
