//! Pawn move generation: pushes, double pushes, captures, en passant, and
//! promotions (four moves per promoting push or capture).

use crate::game_state::chess_rules::{pawn_start_rank, promotion_rank};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::{FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT};

pub fn generate_pawn_moves(
    game_state: &GameState,
    out: &mut Vec<ChessMove>,
    from: Square,
    captures_only: bool,
) {
    let side = game_state.side_to_move;
    let forward = side.forward();
    let last_rank = promotion_rank(side);

    if !captures_only {
        if let Some(one_step) = offset_square(from, 0, forward) {
            if game_state.is_empty(one_step) {
                if rank_of(one_step) == last_rank {
                    push_promotions(game_state, out, from, one_step, None);
                } else {
                    out.push(ChessMove::new(game_state, from, one_step, PieceKind::Pawn, None, None, 0));

                    if rank_of(from) == pawn_start_rank(side) {
                        if let Some(two_step) = offset_square(from, 0, 2 * forward) {
                            if game_state.is_empty(two_step) {
                                out.push(ChessMove::new(
                                    game_state,
                                    from,
                                    two_step,
                                    PieceKind::Pawn,
                                    None,
                                    None,
                                    FLAG_DOUBLE_PAWN_PUSH,
                                ));
                            }
                        }
                    }
                }
            }
        }
    }

    // captures and en-passant
    for file_delta in [-1i8, 1i8] {
        let Some(to) = offset_square(from, file_delta, forward) else {
            continue;
        };

        match game_state.piece_at(to) {
            Some(target) if target.color != side => {
                if rank_of(to) == last_rank {
                    push_promotions(game_state, out, from, to, Some(target.kind));
                } else {
                    out.push(ChessMove::new(
                        game_state,
                        from,
                        to,
                        PieceKind::Pawn,
                        Some(target.kind),
                        None,
                        0,
                    ));
                }
            }
            None if game_state.en_passant_square == Some(to) => {
                out.push(ChessMove::new(
                    game_state,
                    from,
                    to,
                    PieceKind::Pawn,
                    Some(PieceKind::Pawn),
                    None,
                    FLAG_EN_PASSANT,
                ));
            }
            _ => {}
        }
    }
}

fn push_promotions(
    game_state: &GameState,
    out: &mut Vec<ChessMove>,
    from: Square,
    to: Square,
    captured_piece: Option<PieceKind>,
) {
    for promo in PROMOTION_KINDS {
        out.push(ChessMove::new(
            game_state,
            from,
            to,
            PieceKind::Pawn,
            captured_piece,
            Some(promo),
            0,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn pawn_moves(fen: &str, from: &str, captures_only: bool) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        let from = algebraic_to_square(from).expect("square should parse");
        generate_pawn_moves(&game, &mut out, from, captures_only);
        let mut names: Vec<String> = out.iter().map(|mv| mv.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn start_rank_pawn_pushes_once_or_twice() {
        assert_eq!(
            pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", "e2", false),
            ["e2e3", "e2e4"]
        );
        assert_eq!(
            pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", "e2", false),
            ["e2e3"]
        );
        assert!(pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2", false).is_empty());
    }

    #[test]
    fn dark_pawn_promotes_on_capture_and_push() {
        let moves = pawn_moves("4k3/8/8/8/8/8/3p4/2N3K1 b - - 0 1", "d2", false);
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&"d2c1n".to_owned()));
        assert!(moves.contains(&"d2d1q".to_owned()));

        let captures = pawn_moves("4k3/8/8/8/8/8/3p4/2N3K1 b - - 0 1", "d2", true);
        assert_eq!(captures, ["d2c1b", "d2c1n", "d2c1q", "d2c1r"]);
    }

    #[test]
    fn en_passant_only_onto_recorded_target() {
        let moves = pawn_moves("4k3/8/8/2pPp3/8/8/8/4K3 w - e6 0 1", "d5", true);
        assert_eq!(moves, ["d5e6"]);
        let quiet = pawn_moves("4k3/8/8/2pPp3/8/8/8/4K3 w - e6 0 1", "d5", false);
        assert_eq!(quiet, ["d5d6", "d5e6"]);
    }
}
