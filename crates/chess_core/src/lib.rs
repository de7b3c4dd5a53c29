pub mod board;
pub mod check;
pub mod error;
pub mod executor;
pub mod movegen;
pub mod types;

pub use board::*;
pub use check::*;
pub use error::*;
pub use executor::*;
pub use movegen::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every computer opponent
// =============================================================================

/// Result of a move search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// The chosen move (None if the side has no legal move at all)
    pub best_move: Option<Move>,
    /// Evaluation of the chosen move from the searching side's perspective
    pub score: f64,
    /// Search depth in plies
    pub depth: u8,
    /// Number of positions evaluated
    pub nodes: u64,
}

impl SearchResult {
    pub fn no_move(depth: u8, nodes: u64) -> Self {
        Self {
            best_move: None,
            score: 0.0,
            depth,
            nodes,
        }
    }
}

/// Trait that all computer opponents implement.
///
/// Engines receive a shared reference to a board copy and must never rely on
/// mutating the caller's board; the controller owns the real one.
pub trait Engine: Send {
    /// Pick a move for `side` on `board`.
    ///
    /// # Returns
    /// SearchResult whose `best_move` is None only when `side` has no legal
    /// move, which the caller treats as a loss for `side`.
    fn choose_move(&mut self, board: &Board, side: Color) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "minichess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
