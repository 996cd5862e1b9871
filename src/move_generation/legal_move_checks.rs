//! Attack oracle.
//!
//! Answers "could a piece of this color capture on that square right now",
//! ignoring turn order and pins. Reads the board only.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::*;

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let holds = |target: Option<Square>, kind: PieceKind| {
        target.is_some_and(|sq| game_state.piece_at(sq) == Some(Piece::new(attacker_color, kind)))
    };

    if KING_STEPS
        .iter()
        .any(|&(df, dr)| holds(offset_square(square, df, dr), PieceKind::King))
    {
        return true;
    }

    // An attacking pawn sits one rank behind the target from its own side.
    let behind = -attacker_color.forward();
    if [-1, 1]
        .iter()
        .any(|&df| holds(offset_square(square, df, behind), PieceKind::Pawn))
    {
        return true;
    }

    if KNIGHT_STEPS
        .iter()
        .any(|&(df, dr)| holds(offset_square(square, df, dr), PieceKind::Knight))
    {
        return true;
    }

    ray_attacked(game_state, square, attacker_color, &DIAGONAL_STEPS, PieceKind::Bishop)
        || ray_attacked(game_state, square, attacker_color, &ORTHOGONAL_STEPS, PieceKind::Rook)
}

/// Scan each ray to its first occupied square; attacked when that piece is
/// an attacker `slider` or queen.
fn ray_attacked(
    game_state: &GameState,
    square: Square,
    attacker_color: Color,
    steps: &[Step],
    slider: PieceKind,
) -> bool {
    for &(df, dr) in steps {
        let mut current = square;
        while let Some(next) = offset_square(current, df, dr) {
            if let Some(piece) = game_state.piece_at(next) {
                if piece.color == attacker_color
                    && (piece.kind == slider || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}
