//! Material plus mobility evaluation.

use minichess_core::{mobility, Board, Color, PieceKind};
use serde::{Deserialize, Serialize};

/// Material value per piece kind. The king dwarfs everything else so that
/// losing it outweighs any material gain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub pawn: f64,
    pub knight: f64,
    pub bishop: f64,
    pub rook: f64,
    pub queen: f64,
    pub king: f64,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 1.0,
            knight: 3.0,
            bishop: 4.0,
            rook: 5.0,
            queen: 9.0,
            king: 100.0,
        }
    }
}

impl PieceValues {
    pub fn value(&self, kind: PieceKind) -> f64 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }
}

/// Material of `side` minus material of the opponent.
pub fn material(board: &Board, side: Color, values: &PieceValues) -> f64 {
    let own: f64 = board.pieces(side).map(|(_, pc)| values.value(pc.kind)).sum();
    let theirs: f64 = board
        .pieces(side.other())
        .map(|(_, pc)| values.value(pc.kind))
        .sum();
    own - theirs
}

/// Static evaluation from `side`'s perspective.
///
/// Returns:
/// - Positive = good for `side`
/// - Negative = bad for `side`
pub fn evaluate(board: &Board, side: Color, values: &PieceValues, mobility_weight: f64) -> f64 {
    let own = mobility(board, side) as f64;
    let theirs = mobility(board, side.other()) as f64;
    material(board, side, values) + mobility_weight * (own - theirs)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
