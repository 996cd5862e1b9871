//! Ray-scan generation shared by bishops, rooks and queens.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::Step;

/// Walk each ray: quiet moves onto empties, one capture on the first enemy,
/// stop without emitting on the first friendly piece.
pub fn generate_sliding_moves(
    game_state: &GameState,
    out: &mut Vec<ChessMove>,
    from: Square,
    moved_piece: PieceKind,
    steps: &[Step],
    captures_only: bool,
) {
    let side = game_state.side_to_move;

    for &(df, dr) in steps {
        let mut current = from;
        while let Some(to) = offset_square(current, df, dr) {
            match game_state.piece_at(to) {
                None => {
                    if !captures_only {
                        out.push(ChessMove::new(game_state, from, to, moved_piece, None, None, 0));
                    }
                    current = to;
                }
                Some(target) => {
                    if target.color != side {
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
                    break;
                }
            }
        }
    }
}
