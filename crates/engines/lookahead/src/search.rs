//! Two-ply search with a self-check filter.
//!
//! Every candidate is scored twice: by the static evaluation right after it
//! is played, and by the worst evaluation the opponent can force with one
//! reply. The final ranking blends the two.

use minichess_core::{
    all_moves, apply_move, is_in_check, leaves_king_in_check, Board, Color, Move,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::eval::{evaluate, PieceValues};

/// Scores closer than this count as a tie.
const TIE_EPSILON: f64 = 1e-9;

/// Tunables for the two-ply search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Weight of the evaluation right after our move
    pub immediate_weight: f64,
    /// Weight of the evaluation after the opponent's best reply
    pub reply_weight: f64,
    /// Score per move of mobility advantage
    pub mobility_weight: f64,
    /// Score for a move that wins outright (king capture, or an attack the
    /// opponent cannot answer)
    pub decisive_score: f64,
    /// Pick randomly among equally-ranked moves instead of the first one
    pub randomize_ties: bool,
    /// Seed for tie-breaking; None draws from OS entropy
    pub seed: Option<u64>,
    pub values: PieceValues,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            immediate_weight: 0.6,
            reply_weight: 0.4,
            mobility_weight: 0.1,
            decisive_score: 10_000.0,
            randomize_ties: false,
            seed: None,
            values: PieceValues::default(),
        }
    }
}

/// Result of [`pick_best_move`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Chosen move and its combined score (None if `side` has no move at all)
    pub best_move: Option<(Move, f64)>,
    /// True if every move left the king in check and one was played anyway
    pub forced: bool,
}

/// Chooses a move for `side`.
///
/// # Arguments
/// * `board` - The position to search; never modified
/// * `side` - The side to pick a move for
/// * `config` - Weights and piece values
/// * `rng` - Used only to break exact ties when `config.randomize_ties` is set
/// * `nodes` - Counter for positions evaluated
pub fn pick_best_move<R: Rng>(
    board: &Board,
    side: Color,
    config: &SearchConfig,
    rng: &mut R,
    nodes: &mut u64,
) -> SearchOutcome {
    let moves = all_moves(board, side);
    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            forced: false,
        };
    }

    let mut best_score = f64::NEG_INFINITY;
    let mut best: Vec<Move> = Vec::new();

    for &mv in &moves {
        let Ok((after, record)) = apply_move(board, mv.from, mv.to) else {
            continue;
        };
        if is_in_check(&after, side) {
            continue;
        }
        *nodes += 1;

        let score = if record.captured_king() {
            config.decisive_score
        } else {
            let immediate = evaluate(&after, side, &config.values, config.mobility_weight);
            let worst = worst_reply(&after, side, immediate, config, nodes);
            config.immediate_weight * immediate + config.reply_weight * worst
        };

        if score > best_score + TIE_EPSILON {
            best_score = score;
            best.clear();
            best.push(mv);
        } else if (score - best_score).abs() <= TIE_EPSILON {
            best.push(mv);
        }
    }

    if !best.is_empty() {
        let pick = if config.randomize_ties && best.len() > 1 {
            best[rng.gen_range(0..best.len())]
        } else {
            best[0]
        };
        return SearchOutcome {
            best_move: Some((pick, best_score)),
            forced: false,
        };
    }

    // Every move exposes the king. Play one anyway; ranking no longer matters.
    let pick = if config.randomize_ties {
        moves[rng.gen_range(0..moves.len())]
    } else {
        moves[0]
    };
    let score = match apply_move(board, pick.from, pick.to) {
        Ok((after, _)) => evaluate(&after, side, &config.values, config.mobility_weight),
        Err(_) => 0.0,
    };
    SearchOutcome {
        best_move: Some((pick, score)),
        forced: true,
    }
}

/// Lowest evaluation (for `side`) the opponent can reach with one reply.
fn worst_reply(
    after: &Board,
    side: Color,
    immediate: f64,
    config: &SearchConfig,
    nodes: &mut u64,
) -> f64 {
    let opponent = side.other();
    let mut worst = f64::INFINITY;
    let mut any_reply = false;

    for reply in all_moves(after, opponent) {
        if leaves_king_in_check(after, reply, opponent) {
            continue;
        }
        let Ok((next, _)) = apply_move(after, reply.from, reply.to) else {
            continue;
        };
        *nodes += 1;
        any_reply = true;
        let score = evaluate(&next, side, &config.values, config.mobility_weight);
        if score < worst {
            worst = score;
        }
    }

    if any_reply {
        worst
    } else if is_in_check(after, opponent) {
        config.decisive_score
    } else {
        immediate
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
