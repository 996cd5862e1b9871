use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_step_move, KING_STEPS};
use crate::moves::chess_move::{FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE};

pub fn generate_king_moves(
    game_state: &GameState,
    out: &mut Vec<ChessMove>,
    from: Square,
    captures_only: bool,
) {
    for (df, dr) in KING_STEPS {
        if let Some(to) = offset_square(from, df, dr) {
            push_step_move(game_state, out, from, to, PieceKind::King, captures_only);
        }
    }

    if !captures_only {
        generate_castling_moves(game_state, out, from);
    }
}

fn generate_castling_moves(game_state: &GameState, out: &mut Vec<ChessMove>, king_from: Square) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();

    if game_state.castling_rights & castling_rights_of(side) == 0
        || king_from != square_at(KING_START_FILE, side.back_rank())
    {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    for castle_side in [CastleSide::Kingside, CastleSide::Queenside] {
        if game_state.castling_rights & castling_right(side, castle_side) == 0 {
            continue;
        }

        let rook_from = rook_start_square(side, castle_side);
        if game_state.piece_at(rook_from) != Some(Piece::new(side, PieceKind::Rook)) {
            continue;
        }

        let (low, high) = (king_from.min(rook_from), king_from.max(rook_from));
        if ((low + 1)..high).any(|square| !game_state.is_empty(square)) {
            continue;
        }

        // Squares the king crosses and lands on; the rook's extra b-file
        // square on the queenside is not checked.
        let king_to = king_castle_square(side, castle_side);
        let king_path_attacked = if king_to > king_from {
            ((king_from + 1)..=king_to).any(|square| is_square_attacked(game_state, square, enemy))
        } else {
            (king_to..king_from).any(|square| is_square_attacked(game_state, square, enemy))
        };
        if king_path_attacked {
            continue;
        }

        let flag = match castle_side {
            CastleSide::Kingside => FLAG_CASTLE_KINGSIDE,
            CastleSide::Queenside => FLAG_CASTLE_QUEENSIDE,
        };
        out.push(ChessMove::new(game_state, king_from, king_to, PieceKind::King, None, None, flag));
    }
}
