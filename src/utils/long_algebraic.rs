//! Coordinate move notation (`e2e4`, `e7e8q`).
//!
//! Formatting is used for diagnostics and logging. Parsing resolves a string
//! against the legal moves of a position, so the returned move carries the
//! correct flags and pre-move snapshot.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(chess_move: &ChessMove) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(chess_move.from));
    out.push_str(&square_to_algebraic(chess_move.to));

    if let Some(promotion_piece) = chess_move.promotion_piece {
        out.push(promotion_to_char(promotion_piece));
    }

    out
}

/// Find the legal move of `game_state` written as `long_algebraic`.
pub fn long_algebraic_to_legal_move(
    game_state: &mut GameState,
    long_algebraic: &str,
) -> ChessResult<ChessMove> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(ChessError::InvalidMove(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    let promotion_piece = match long_algebraic[4..].chars().next() {
        Some(ch) => Some(
            char_to_promotion(ch).ok_or_else(|| ChessError::InvalidMove(long_algebraic.to_owned()))?,
        ),
        None => None,
    };

    generate_legal_moves(game_state)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion_piece == promotion_piece)
        .ok_or_else(|| ChessError::IllegalMove(long_algebraic.to_owned()))
}

fn promotion_to_char(piece_kind: PieceKind) -> char {
    match piece_kind {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        _ => 'q',
    }
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}
