//! Pseudo-legal move generation pipeline.
//!
//! Scans the mailbox once for the side to move and dispatches each piece to
//! its generator. Moves may still leave the mover's king attacked; see
//! `legal_move_generator` for the filter.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{DIAGONAL_STEPS, ORTHOGONAL_STEPS, QUEEN_STEPS};
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_sliding::generate_sliding_moves;

/// All pseudo-legal moves, or only those landing on an enemy piece (plus en
/// passant) when `captures_only` is set.
pub fn generate_moves(game_state: &GameState, captures_only: bool) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(if captures_only { 16 } else { 64 });
    generate_moves_into(game_state, captures_only, &mut out);
    out
}

pub fn generate_moves_into(game_state: &GameState, captures_only: bool, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;

    for (from, piece) in game_state.pieces() {
        if piece.color != side {
            continue;
        }

        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, out, from, captures_only),
            PieceKind::Knight => generate_knight_moves(game_state, out, from, captures_only),
            PieceKind::Bishop => generate_sliding_moves(
                game_state,
                out,
                from,
                PieceKind::Bishop,
                &DIAGONAL_STEPS,
                captures_only,
            ),
            PieceKind::Rook => generate_sliding_moves(
                game_state,
                out,
                from,
                PieceKind::Rook,
                &ORTHOGONAL_STEPS,
                captures_only,
            ),
            PieceKind::Queen => generate_sliding_moves(
                game_state,
                out,
                from,
                PieceKind::Queen,
                &QUEEN_STEPS,
                captures_only,
            ),
            PieceKind::King => generate_king_moves(game_state, out, from, captures_only),
        }
    }
}
