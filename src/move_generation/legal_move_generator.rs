//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves, applies each candidate in place, rejects the
//! ones that leave the mover's king attacked, and reverts. The position is
//! borrowed mutably only for the apply/revert probe; it is unchanged when the
//! functions here return.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::generate_moves;

/// Outcome of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is checkmated.
    Checkmate,
    Stalemate,
}

/// After a move has been applied: is the side that just moved out of check?
#[inline]
pub fn leaves_king_safe(game_state: &GameState) -> bool {
    !is_king_in_check(game_state, game_state.side_to_move.opposite())
}

pub fn is_legal(game_state: &mut GameState, chess_move: &ChessMove) -> bool {
    apply_move(game_state, chess_move);
    let legal = leaves_king_safe(game_state);
    revert_move(game_state, chess_move);
    legal
}

pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    let mut moves = generate_moves(game_state, false);
    moves.retain(|mv| is_legal(game_state, mv));
    moves
}

/// Legal moves whose origin is `from`.
pub fn legal_moves_from(game_state: &mut GameState, from: Square) -> Vec<ChessMove> {
    let mut moves = generate_moves(game_state, false);
    moves.retain(|mv| mv.from == from && is_legal(game_state, mv));
    moves
}

pub fn has_legal_move(game_state: &mut GameState) -> bool {
    generate_moves(game_state, false)
        .iter()
        .any(|mv| is_legal(game_state, mv))
}

pub fn game_status(game_state: &mut GameState) -> GameStatus {
    if has_legal_move(game_state) {
        GameStatus::Ongoing
    } else if is_king_in_check(game_state, game_state.side_to_move) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}
