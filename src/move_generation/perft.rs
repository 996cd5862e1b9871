//! Perft: exhaustive legal-move tree counts for validating the generator.

use std::time::Instant;

use log::{debug, trace};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, has_legal_move};

/// Leaf statistics in the layout of the published perft tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf positions `depth` plies below `game_state`.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    let started = Instant::now();
    let nodes = perft_nodes(game_state, depth);
    debug!(
        "perft depth {depth} nodes {nodes} in {:.3}s",
        started.elapsed().as_secs_f64()
    );
    nodes
}

fn perft_nodes(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in &moves {
        apply_move(game_state, mv);
        nodes += perft_nodes(game_state, depth - 1);
        revert_move(game_state, mv);
    }
    nodes
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(ChessMove, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = generate_legal_moves(game_state);
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        apply_move(game_state, &mv);
        let nodes = perft_nodes(game_state, depth - 1);
        revert_move(game_state, &mv);
        trace!("{mv}: {nodes}");
        out.push((mv, nodes));
    }
    out
}

/// Like [`perft`], but classifies the moves leading into each leaf.
pub fn perft_counts(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(game_state) {
        apply_move(game_state, &mv);
        if depth == 1 {
            total.merge(classify_leaf(game_state, &mv));
        } else {
            total.merge(perft_counts(game_state, depth - 1));
        }
        revert_move(game_state, &mv);
    }
    total
}

fn classify_leaf(game_state: &mut GameState, mv: &ChessMove) -> PerftCounts {
    let gives_check = is_king_in_check(game_state, game_state.side_to_move);
    PerftCounts {
        nodes: 1,
        captures: u64::from(mv.is_capture()),
        en_passant: u64::from(mv.is_en_passant()),
        castles: u64::from(mv.is_castle()),
        promotions: u64::from(mv.is_promotion()),
        checks: u64::from(gives_check),
        checkmates: u64::from(gives_check && !has_legal_move(game_state)),
    }
}
