//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used as a weak sparring partner for
//! self-play and to generate playouts.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::generate_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible move choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Mailbox Random"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> EngineOutput {
        let legal_moves = generate_legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));
        out.best_move = legal_moves.choose(&mut self.rng).copied();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move_and_leaves_position_alone() {
        let mut engine = RandomEngine::with_seed(11);
        let mut game = GameState::new_game();
        let out = engine.choose_move(&mut game);
        let picked = out.best_move.expect("start position has moves");
        assert!(generate_legal_moves(&mut game).contains(&picked));
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn same_seed_same_choices() {
        let mut a = RandomEngine::with_seed(3);
        let mut b = RandomEngine::with_seed(3);
        let mut game = GameState::new_game();
        for _ in 0..5 {
            assert_eq!(a.choose_move(&mut game).best_move, b.choose_move(&mut game).best_move);
        }
    }

    #[test]
    fn no_move_when_mated() {
        let mut game = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
        assert_eq!(RandomEngine::with_seed(0).choose_move(&mut game).best_move, None);
    }
}
