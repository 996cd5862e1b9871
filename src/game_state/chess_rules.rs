//! Canonical chess-rule constants.
//!
//! Stores the standard starting position plus the castling geometry tables
//! used by generation and application of castling moves.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// File the king starts on for both colors.
pub const KING_START_FILE: u8 = 4;

/// Castling side, used to index the geometry tables below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        }
    }
}

/// Rook start files, `[kingside, queenside]`.
pub const ROOK_START_FILES: [u8; 2] = [7, 0];
/// King destination files, `[kingside, queenside]`.
pub const KING_CASTLE_FILES: [u8; 2] = [6, 2];
/// Rook destination files, `[kingside, queenside]`.
pub const ROOK_CASTLE_FILES: [u8; 2] = [5, 3];

/// Rights bit for a color/side pair.
#[inline]
pub const fn castling_right(color: Color, side: CastleSide) -> CastlingRights {
    match (color, side) {
        (Color::Light, CastleSide::Kingside) => CASTLE_LIGHT_KINGSIDE,
        (Color::Light, CastleSide::Queenside) => CASTLE_LIGHT_QUEENSIDE,
        (Color::Dark, CastleSide::Kingside) => CASTLE_DARK_KINGSIDE,
        (Color::Dark, CastleSide::Queenside) => CASTLE_DARK_QUEENSIDE,
    }
}

/// Both rights bits of one color.
#[inline]
pub const fn castling_rights_of(color: Color) -> CastlingRights {
    castling_right(color, CastleSide::Kingside) | castling_right(color, CastleSide::Queenside)
}

#[inline]
pub const fn rook_start_square(color: Color, side: CastleSide) -> Square {
    square_at(ROOK_START_FILES[side.index()], color.back_rank())
}

#[inline]
pub const fn king_castle_square(color: Color, side: CastleSide) -> Square {
    square_at(KING_CASTLE_FILES[side.index()], color.back_rank())
}

#[inline]
pub const fn rook_castle_square(color: Color, side: CastleSide) -> Square {
    square_at(ROOK_CASTLE_FILES[side.index()], color.back_rank())
}

/// Rights lost when a piece leaves or is captured on `square`: the rook
/// corners only. King moves are handled separately.
#[inline]
pub const fn rights_cleared_by_corner(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_LIGHT_QUEENSIDE,
        7 => CASTLE_LIGHT_KINGSIDE,
        56 => CASTLE_DARK_QUEENSIDE,
        63 => CASTLE_DARK_KINGSIDE,
        _ => 0,
    }
}

/// Rank a pawn of `color` double-pushes from.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

/// Rank a pawn of `color` promotes on.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}
