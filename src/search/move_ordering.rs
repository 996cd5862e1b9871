//! Capture-first move ordering for alpha-beta.

use crate::game_state::chess_types::*;
use crate::search::board_scoring::piece_value;

/// Attacker weight of the king when ordering captures. Large enough that a
/// king capture sorts below every other move.
const KING_ORDER_VALUE: i32 = 20_000;

#[inline]
fn attacker_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::King => KING_ORDER_VALUE,
        _ => piece_value(piece),
    }
}

/// Captures by value gained (twice the victim/attacker difference), then quiet
/// promotions by promoted value.
#[inline]
pub fn move_order_score(chess_move: &ChessMove) -> i32 {
    match chess_move.captured_piece {
        Some(captured) => 2 * (piece_value(captured) - attacker_value(chess_move.moved_piece)),
        None => chess_move.promotion_piece.map_or(0, piece_value),
    }
}

/// Sort best-first. Stable, so equal scores keep generation order.
pub fn order_moves(moves: &mut [ChessMove]) {
    moves.sort_by_cached_key(|mv| std::cmp::Reverse(move_order_score(mv)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    #[test]
    fn cheap_attacker_on_big_victim_comes_first() {
        // Pawn takes queen, queen takes pawn, and quiet moves.
        let mut game = GameState::from_fen("4k3/8/8/3q4/4P3/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        let mut moves = generate_legal_moves(&mut game);
        order_moves(&mut moves);

        assert_eq!(moves[0].to_string(), "e4d5");
        assert_eq!(move_order_score(&moves[0]), 2 * (900 - 100));
        let queen_trade = moves
            .iter()
            .find(|mv| mv.to_string() == "d1d5")
            .expect("queen can capture");
        assert_eq!(move_order_score(queen_trade), 0);

        let scores: Vec<i32> = moves.iter().map(move_order_score).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn quiet_promotions_rank_by_piece() {
        let mut game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = generate_legal_moves(&mut game);
        order_moves(&mut moves);
        let names: Vec<String> = moves.iter().take(4).map(|mv| mv.to_string()).collect();
        assert_eq!(names, ["a7a8q", "a7a8r", "a7a8b", "a7a8n"]);
    }

    #[test]
    fn king_captures_sort_last() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/p7/3n4/Q3K3 w - - 0 1").expect("FEN should parse");
        let mut moves = generate_legal_moves(&mut game);
        order_moves(&mut moves);
        let last = moves.last().expect("moves exist");
        assert_eq!(last.to_string(), "e1d2");
        assert!(move_order_score(last) < 2 * (100 - 900));
        assert_eq!(
            moves.iter().rev().nth(1).map(|mv| mv.to_string()).as_deref(),
            Some("a1a3")
        );
    }

    #[test]
    fn losing_captures_sort_below_quiet_moves() {
        let mut game = GameState::from_fen("4k3/8/8/3p4/8/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        let mut moves = generate_legal_moves(&mut game);
        order_moves(&mut moves);
        let last = moves.last().expect("moves exist");
        assert_eq!(last.to_string(), "d1d5");
        assert_eq!(move_order_score(last), 2 * (100 - 900));
    }
}
