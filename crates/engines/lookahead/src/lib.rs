//! Lookahead Opponent
//!
//! Two-ply search with a material + mobility evaluation.
//! This is the default computer opponent.

mod eval;
mod search;

use minichess_core::{Board, Color, Engine, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Computer opponent that looks one reply ahead.
///
/// This engine uses:
/// - A self-check filter on its own candidates and on the opponent's replies
/// - Static evaluation: material plus a small mobility term
/// - A weighted blend of the immediate score and the worst score after reply
#[derive(Debug, Clone)]
pub struct LookaheadEngine {
    config: SearchConfig,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for LookaheadEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl LookaheadEngine {
    pub fn new(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Engine for LookaheadEngine {
    fn choose_move(&mut self, board: &Board, side: Color) -> SearchResult {
        self.nodes = 0;

        let outcome = search::pick_best_move(board, side, &self.config, &mut self.rng, &mut self.nodes);

        match outcome.best_move {
            Some((mv, score)) => {
                debug!(%side, %mv, score, nodes = self.nodes, forced = outcome.forced, "lookahead chose move");
                SearchResult {
                    best_move: Some(mv),
                    score,
                    depth: 2,
                    nodes: self.nodes,
                }
            }
            None => {
                debug!(%side, "lookahead found no legal move");
                SearchResult::no_move(2, self.nodes)
            }
        }
    }

    fn name(&self) -> &str {
        "Lookahead v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        if let Some(seed) = self.config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, material, PieceValues};
pub use search::{pick_best_move, SearchConfig, SearchOutcome};
