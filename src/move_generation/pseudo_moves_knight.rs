use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_step_move, KNIGHT_STEPS};

pub fn generate_knight_moves(
    game_state: &GameState,
    out: &mut Vec<ChessMove>,
    from: Square,
    captures_only: bool,
) {
    for (df, dr) in KNIGHT_STEPS {
        if let Some(to) = offset_square(from, df, dr) {
            push_step_move(game_state, out, from, to, PieceKind::Knight, captures_only);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn corner_knight_jumps_over_blockers() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/PP6/N3K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&game, &mut out, square_at(0, 0), false);
        let mut names: Vec<String> = out.iter().map(|mv| mv.to_string()).collect();
        names.sort();
        assert_eq!(names, ["a1b3", "a1c2"]);
    }
}
