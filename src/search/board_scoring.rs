//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search delegates static position scoring to [`BoardScorer`], so alternate
//! heuristics can be swapped without altering search code.

use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Material value in centipawns. The king is never traded, so it counts 0.
#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 310,
        PieceKind::Bishop => 320,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

#[inline]
fn from_side_to_move(game_state: &GameState, light_minus_dark: i32) -> i32 {
    match game_state.side_to_move {
        Color::Light => light_minus_dark,
        Color::Dark => -light_minus_dark,
    }
}

/// Material only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let light_minus_dark = game_state
            .pieces()
            .map(|(_, piece)| match piece.color {
                Color::Light => piece_value(piece.kind),
                Color::Dark => -piece_value(piece.kind),
            })
            .sum();
        from_side_to_move(game_state, light_minus_dark)
    }
}

/// Material plus a piece-square bonus per piece kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl PieceSquareScorer {
    /// Bonus for `piece` standing on `square`. Tables are laid out from
    /// Light's side; Dark reads the rank-mirrored square.
    #[inline]
    pub fn piece_square_bonus(piece: Piece, square: Square) -> i32 {
        let square = match piece.color {
            Color::Light => square,
            Color::Dark => mirror_square(square),
        };
        PIECE_SQUARE_TABLES[piece.kind.index()][square as usize]
    }
}

impl BoardScorer for PieceSquareScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let mut light_minus_dark = 0;
        for (square, piece) in game_state.pieces() {
            let value = piece_value(piece.kind) + Self::piece_square_bonus(piece, square);
            match piece.color {
                Color::Light => light_minus_dark += value,
                Color::Dark => light_minus_dark -= value,
            }
        }
        from_side_to_move(game_state, light_minus_dark)
    }
}

// Indexed by `rank * 8 + file`: the first row of each table is rank 1.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10, -20, -20,  10,  10,   5,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      0,   0,   0,  35,  35,   0,   0,   0,
      5,   5,  15,  40,  40,  15,   5,   5,
     10,  10,  25,  45,  45,  25,  10,  10,
     50,  50,  50,  50,  50,  50,  50,  50,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50, -30, -30, -30, -30, -30, -30, -50,
    -30, -20,   0,   0,   0,   0, -20, -30,
    -30,   0,   5,   5,   5,   5,   0, -30,
    -30,   0,   5,   5,   5,   5,   0, -30,
    -30,   0,   5,   5,   5,   5,   0, -30,
    -30,   0,   5,   5,   5,   5,   0, -30,
    -30, -20,   0,   0,   0,   0, -20, -30,
    -50, -30, -30, -30, -30, -30, -30, -50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

const QUEEN_TABLE: [i32; 64] = [0; 64];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

// Order matches `PieceKind::index`.
const PIECE_SQUARE_TABLES: [[i32; 64]; 6] = [
    PAWN_TABLE,
    KNIGHT_TABLE,
    BISHOP_TABLE,
    ROOK_TABLE,
    QUEEN_TABLE,
    KING_TABLE,
];

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONS: [&str; 4] = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ];

    #[test]
    fn start_position_is_balanced() {
        let game = GameState::new_game();
        assert_eq!(PieceSquareScorer.score(&game), 0);
        assert_eq!(MaterialScorer.score(&game), 0);
    }

    #[test]
    fn score_is_symmetric_under_color_mirroring() {
        for fen in POSITIONS {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            let mirrored = game.mirrored();
            assert_eq!(
                PieceSquareScorer.score(&game),
                PieceSquareScorer.score(&mirrored),
                "{fen}"
            );
        }
    }

    #[test]
    fn score_flips_sign_with_side_to_move() {
        let light = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        let dark = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 b - - 0 1").expect("FEN should parse");
        let score = PieceSquareScorer.score(&light);
        assert!(score > 800);
        assert_eq!(PieceSquareScorer.score(&dark), -score);
        assert_eq!(MaterialScorer.score(&light), 900);
    }

    #[test]
    fn dark_reads_mirrored_table() {
        let light_pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let dark_pawn = Piece::new(Color::Dark, PieceKind::Pawn);
        // d4 for Light mirrors d5 for Dark.
        assert_eq!(PieceSquareScorer::piece_square_bonus(light_pawn, square_at(3, 3)), 35);
        assert_eq!(PieceSquareScorer::piece_square_bonus(dark_pawn, square_at(3, 4)), 35);
        assert_eq!(PieceSquareScorer::piece_square_bonus(dark_pawn, square_at(3, 6)), -20);
    }
}
