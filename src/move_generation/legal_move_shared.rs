//! Step tables and emit helpers shared by the per-piece generators and the
//! attack oracle.

use crate::game_state::chess_types::*;

/// `(file, rank)` steps.
pub type Step = (i8, i8);

pub const DIAGONAL_STEPS: [Step; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONAL_STEPS: [Step; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
pub const QUEEN_STEPS: [Step; 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
];
pub const KNIGHT_STEPS: [Step; 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];
pub const KING_STEPS: [Step; 8] = QUEEN_STEPS;

/// Emit a single non-pawn step onto `to`: quiet onto an empty square (unless
/// `captures_only`), a capture onto an enemy piece, nothing onto a friend.
#[inline]
pub fn push_step_move(
    game_state: &GameState,
    out: &mut Vec<ChessMove>,
    from: Square,
    to: Square,
    moved_piece: PieceKind,
    captures_only: bool,
) {
    match game_state.piece_at(to) {
        None if !captures_only => {
            out.push(ChessMove::new(game_state, from, to, moved_piece, None, None, 0));
        }
        Some(target) if target.color != game_state.side_to_move => {
            out.push(ChessMove::new(
                game_state,
                from,
                to,
                moved_piece,
                Some(target.kind),
                None,
                0,
            ));
        }
        _ => {}
    }
}
