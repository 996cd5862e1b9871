//! Fixed-depth negamax with fail-hard alpha-beta pruning and a captures-only
//! quiescence extension at the horizon.
//!
//! The position is searched in place: every move applied inside the tree is
//! reverted before the enclosing call returns, so `search` hands the caller
//! back the position it was given.

use std::time::Instant;

use log::debug;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::leaves_king_safe;
use crate::move_generation::move_generator::generate_moves;
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::order_moves;

pub const INFINITY_SCORE: i32 = 100_000;
/// Base score of a checkmate. The mated side scores
/// `-(MATE_SCORE + depth_remaining)`, so mates nearer the root score further
/// from zero and the winning side prefers the fastest one.
pub const MATE_SCORE: i32 = INFINITY_SCORE - 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub quiescence_nodes: u64,
    /// Deepest capture chain followed past the horizon.
    pub max_quiescence_ply: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the root has no legal move (or for a depth 0 search).
    pub best_move: Option<ChessMove>,
    /// From the perspective of the side to move at the root.
    pub score: i32,
    pub stats: SearchStats,
}

pub struct Searcher<S: BoardScorer> {
    scorer: S,
    stats: SearchStats,
    best_move: Option<ChessMove>,
}

impl<S: BoardScorer> Searcher<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            stats: SearchStats::default(),
            best_move: None,
        }
    }

    pub fn search(&mut self, game_state: &mut GameState, depth: u8) -> SearchResult {
        let started = Instant::now();
        self.stats = SearchStats::default();
        self.best_move = None;

        let score = self.negamax(game_state, depth, 0, -INFINITY_SCORE, INFINITY_SCORE);

        let result = SearchResult {
            best_move: self.best_move.take(),
            score,
            stats: self.stats,
        };
        debug!(
            "search depth {depth} score {score} best {} nodes {} qnodes {} max_qply {} in {:.3}s",
            result
                .best_move
                .map_or_else(|| "(none)".to_owned(), |mv| mv.to_string()),
            result.stats.nodes,
            result.stats.quiescence_nodes,
            result.stats.max_quiescence_ply,
            started.elapsed().as_secs_f64()
        );
        result
    }

    fn negamax(
        &mut self,
        game_state: &mut GameState,
        depth_remaining: u8,
        ply: u32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        if depth_remaining == 0 {
            return self.quiescence(game_state, 0, alpha, beta);
        }
        self.stats.nodes += 1;

        let mut moves = generate_moves(game_state, false);
        order_moves(&mut moves);

        let mut any_legal = false;
        for mv in &moves {
            apply_move(game_state, mv);
            if !leaves_king_safe(game_state) {
                revert_move(game_state, mv);
                continue;
            }
            any_legal = true;

            let score = -self.negamax(game_state, depth_remaining - 1, ply + 1, -beta, -alpha);
            revert_move(game_state, mv);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
                if ply == 0 {
                    self.best_move = Some(*mv);
                }
            }
        }

        if !any_legal {
            return if is_king_in_check(game_state, game_state.side_to_move) {
                -(MATE_SCORE + i32::from(depth_remaining))
            } else {
                0
            };
        }

        alpha
    }

    fn quiescence(&mut self, game_state: &mut GameState, qply: u32, mut alpha: i32, beta: i32) -> i32 {
        self.stats.quiescence_nodes += 1;
        self.stats.max_quiescence_ply = self.stats.max_quiescence_ply.max(qply);

        let stand_pat = self.scorer.score(game_state);
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut captures = generate_moves(game_state, true);
        order_moves(&mut captures);

        for mv in &captures {
            apply_move(game_state, mv);
            if !leaves_king_safe(game_state) {
                revert_move(game_state, mv);
                continue;
            }

            let score = -self.quiescence(game_state, qply + 1, -beta, -alpha);
            revert_move(game_state, mv);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::{game_status, generate_legal_moves, GameStatus};
    use crate::search::board_scoring::{MaterialScorer, PieceSquareScorer};

    /// Same tree as `Searcher::negamax`, visited without any pruning.
    fn full_width<S: BoardScorer>(scorer: &S, game_state: &mut GameState, depth_remaining: u8) -> i32 {
        if depth_remaining == 0 {
            return full_width_quiescence(scorer, game_state);
        }
        let moves = generate_legal_moves(game_state);
        if moves.is_empty() {
            return if is_king_in_check(game_state, game_state.side_to_move) {
                -(MATE_SCORE + i32::from(depth_remaining))
            } else {
                0
            };
        }
        let mut best = -INFINITY_SCORE;
        for mv in &moves {
            apply_move(game_state, mv);
            best = best.max(-full_width(scorer, game_state, depth_remaining - 1));
            revert_move(game_state, mv);
        }
        best
    }

    fn full_width_quiescence<S: BoardScorer>(scorer: &S, game_state: &mut GameState) -> i32 {
        let mut best = scorer.score(game_state);
        for mv in generate_moves(game_state, true) {
            apply_move(game_state, &mv);
            if leaves_king_safe(game_state) {
                best = best.max(-full_width_quiescence(scorer, game_state));
            }
            revert_move(game_state, &mv);
        }
        best
    }

    #[test]
    fn default_depth_is_four() {
        assert_eq!(SearchConfig::default().depth, 4);
    }

    #[test]
    fn alpha_beta_matches_full_width_negamax() {
        let cases = [
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 3),
            ("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3", 2),
            ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3),
            ("4k3/8/8/3q4/4P3/8/8/3QK3 w - - 0 1", 2),
        ];
        for (fen, depth) in cases {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let expected = full_width(&PieceSquareScorer, &mut game, depth);
            let result = Searcher::new(PieceSquareScorer).search(&mut game, depth);
            assert_eq!(result.score, expected, "{fen} depth {depth}");

            let expected_material = full_width(&MaterialScorer, &mut game, depth);
            let material = Searcher::new(MaterialScorer).search(&mut game, depth);
            assert_eq!(material.score, expected_material, "{fen} depth {depth} (material)");
        }
    }

    #[test]
    fn search_restores_the_position() {
        let mut game = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let original = game.clone();
        let result = Searcher::new(PieceSquareScorer).search(&mut game, 2);
        assert_eq!(game, original);
        assert!(result.best_move.is_some());
        assert!(result.stats.nodes > 0);
    }

    #[test]
    fn quiescence_depth_is_bounded_by_material() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        ] {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let result = Searcher::new(PieceSquareScorer).search(&mut game, 1);
            assert!(result.stats.quiescence_nodes > 0);
            assert!(result.stats.max_quiescence_ply as usize <= game.piece_count(), "{fen}");
        }
    }

    #[test]
    fn takes_a_hanging_queen() {
        let mut game = GameState::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        let result = Searcher::new(PieceSquareScorer).search(&mut game, 2);
        assert_eq!(result.best_move.map(|mv| mv.to_string()).as_deref(), Some("d1d5"));
        assert!(result.score > 300);
    }

    #[test]
    fn finds_mate_in_one_and_prefers_it_at_every_depth() {
        // Dark to move plays Qh4#.
        let fen = "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2";
        for depth in [2u8, 3] {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let result = Searcher::new(PieceSquareScorer).search(&mut game, depth);
            let best = result.best_move.expect("a move exists");
            assert_eq!(best.to_string(), "d8h4");
            assert_eq!(result.score, MATE_SCORE + i32::from(depth - 1));

            apply_move(&mut game, &best);
            assert_eq!(game_status(&mut game), GameStatus::Checkmate);
        }
    }

    #[test]
    fn prefers_the_fastest_mate_with_depth_to_spare() {
        // Ra8 mates at once; slower mates are also available at depth 4.
        let mut game = GameState::from_fen("7k/1R6/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        for depth in [2u8, 4] {
            let result = Searcher::new(PieceSquareScorer).search(&mut game, depth);
            assert_eq!(
                result.best_move.map(|mv| mv.to_string()).as_deref(),
                Some("a1a8"),
                "depth {depth}"
            );
            assert_eq!(result.score, MATE_SCORE + i32::from(depth - 1));
        }
    }

    #[test]
    fn root_without_legal_moves_reports_terminal_score() {
        let mut mated = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
        let result = Searcher::new(PieceSquareScorer).search(&mut mated, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -(MATE_SCORE + 3));

        let mut stalemated = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let result = Searcher::new(PieceSquareScorer).search(&mut stalemated, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }
}
