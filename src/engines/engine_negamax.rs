//! Fixed-depth alpha-beta engine over the piece-square evaluator.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::*;
use crate::search::board_scoring::PieceSquareScorer;
use crate::search::negamax::{SearchConfig, Searcher};

pub struct NegamaxEngine {
    config: SearchConfig,
    searcher: Searcher<PieceSquareScorer>,
}

impl NegamaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            searcher: Searcher::new(PieceSquareScorer),
        }
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Mailbox Negamax"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> EngineOutput {
        let result = self.searcher.search(game_state, self.config.depth);
        EngineOutput {
            best_move: result.best_move,
            score: Some(result.score),
            info_lines: vec![format!(
                "depth {} score {} nodes {} qnodes {}",
                self.config.depth,
                result.score,
                result.stats.nodes,
                result.stats.quiescence_nodes
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_the_mating_move() {
        let mut game = GameState::from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2")
            .expect("FEN should parse");
        let mut engine = NegamaxEngine::new(SearchConfig { depth: 2 });
        let out = engine.choose_move(&mut game);
        assert_eq!(out.best_move.map(|mv| mv.to_string()).as_deref(), Some("d8h4"));
        assert!(out.score.is_some_and(|score| score > 90_000));
    }

    #[test]
    fn reused_engine_answers_like_a_fresh_one() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let config = SearchConfig { depth: 2 };

        let mut reused = NegamaxEngine::new(config);
        let mut other_game = GameState::new_game();
        reused.choose_move(&mut other_game);

        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let first = reused.choose_move(&mut game);
        let fresh = NegamaxEngine::new(config).choose_move(&mut game);
        assert_eq!(first.best_move, fresh.best_move);
        assert_eq!(first.score, fresh.score);
    }
}
