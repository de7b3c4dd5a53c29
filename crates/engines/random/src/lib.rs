//! Random Move Opponent
//!
//! Selects uniformly at random among the moves that keep the king safe.
//! Useful for:
//! - A gentle opponent for new players
//! - Baseline comparisons (the lookahead engine should easily beat this)
//! - Smoke-testing the turn controller

use minichess_core::{all_moves, safe_moves, Board, Color, Engine, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

/// An opponent that plays random king-safe moves.
///
/// When every move exposes the king it still plays one of them, so the only
/// time it reports no move is when the side has no moves at all.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &Board, side: Color) -> SearchResult {
        let mut moves = safe_moves(board, side);
        if moves.is_empty() {
            moves = all_moves(board, side);
        }
        self.nodes = moves.len() as u64;

        let best_move = moves.choose(&mut self.rng).copied();
        debug!(%side, candidates = moves.len(), ?best_move, "random engine picked");

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
