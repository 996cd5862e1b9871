//! In-place move application and exact reversal.
//!
//! `revert_move` restores castling rights, en-passant target and halfmove
//! clock from the snapshot embedded in the move, so an apply/revert pair
//! leaves the state bit-for-bit unchanged without copying the board.

use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::FLAG_CASTLE_KINGSIDE;

pub fn apply_move(game_state: &mut GameState, chess_move: &ChessMove) {
    let mover = game_state.side_to_move;
    let enemy = mover.opposite();
    let from = chess_move.from;
    let to = chess_move.to;

    debug_assert_eq!(
        game_state.piece_at(from),
        Some(Piece::new(mover, chess_move.moved_piece)),
        "move {chess_move} does not start on a piece of the side to move"
    );

    // Update castling rights.
    if chess_move.moved_piece == PieceKind::King {
        game_state.castling_rights &= !castling_rights_of(mover);
    }
    game_state.castling_rights &= !(rights_cleared_by_corner(from) | rights_cleared_by_corner(to));

    // Update en-passant square.
    game_state.en_passant_square = None;
    if chess_move.is_double_pawn_push() {
        game_state.en_passant_square = Some(square_at(
            file_of(from),
            (rank_of(from) + rank_of(to)) / 2,
        ));
    } else if chess_move.is_en_passant() {
        game_state.clear_square(chess_move.en_passant_victim_square());
    } else if chess_move.is_castle() {
        let side = castle_side_of(chess_move);
        game_state.clear_square(rook_start_square(mover, side));
        game_state.set_piece(
            rook_castle_square(mover, side),
            Piece::new(mover, PieceKind::Rook),
        );
    }

    // Update clocks.
    if chess_move.moved_piece == PieceKind::Pawn || chess_move.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.wrapping_add(1);
    }
    if mover == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.wrapping_add(1);
    }

    // Place moved/promoted piece on destination.
    let placed = chess_move.promotion_piece.unwrap_or(chess_move.moved_piece);
    game_state.clear_square(from);
    game_state.set_piece(to, Piece::new(mover, placed));

    game_state.side_to_move = enemy;
}

pub fn revert_move(game_state: &mut GameState, chess_move: &ChessMove) {
    let mover = game_state.side_to_move.opposite();
    let enemy = game_state.side_to_move;

    game_state.side_to_move = mover;
    if mover == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.wrapping_sub(1);
    }

    game_state.clear_square(chess_move.to);
    if chess_move.is_en_passant() {
        game_state.set_piece(
            chess_move.en_passant_victim_square(),
            Piece::new(enemy, PieceKind::Pawn),
        );
    } else if let Some(captured) = chess_move.captured_piece {
        game_state.set_piece(chess_move.to, Piece::new(enemy, captured));
    } else if chess_move.is_castle() {
        let side = castle_side_of(chess_move);
        game_state.clear_square(rook_castle_square(mover, side));
        game_state.set_piece(
            rook_start_square(mover, side),
            Piece::new(mover, PieceKind::Rook),
        );
    }
    game_state.set_piece(chess_move.from, Piece::new(mover, chess_move.moved_piece));

    game_state.castling_rights = chess_move.prev_castling_rights;
    game_state.en_passant_square = chess_move.prev_en_passant_square;
    game_state.halfmove_clock = chess_move.prev_halfmove_clock;
}

#[inline]
fn castle_side_of(chess_move: &ChessMove) -> CastleSide {
    if chess_move.flags & FLAG_CASTLE_KINGSIDE != 0 {
        CastleSide::Kingside
    } else {
        CastleSide::Queenside
    }
}
