//! Engine abstraction shared by the command-line game loop.
//!
//! Lets different move-selection strategies be picked at runtime behind a
//! single trait object.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    /// Side-to-move score, when the engine evaluates positions.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Pick a move for the side to move. `game_state` is left as it was
    /// passed in; `best_move` is `None` only when no legal move exists.
    fn choose_move(&mut self, game_state: &mut GameState) -> EngineOutput;
}
