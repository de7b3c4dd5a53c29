//! Attack and check detection.
//!
//! Attacks are defined through the move generator: a square is attacked by a
//! side when some piece of that side could move there. Pawns therefore only
//! attack diagonally-forward squares that hold an enemy piece, which is
//! always the case for a king square.

use crate::{board::Board, movegen::legal_moves_into, types::*};

/// Whether any piece of `by` has `target` among its destinations.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let mut targets = Vec::with_capacity(16);
    for (from, _) in board.pieces(by) {
        targets.clear();
        legal_moves_into(board, from, &mut targets);
        if targets.contains(&target) {
            return true;
        }
    }
    false
}

/// Whether `side`'s king is attacked. A side without a king is never in
/// check; losing the king is handled by whoever applied the capture.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    match board.king_square(side) {
        Some(ksq) => is_square_attacked(board, ksq, side.other()),
        None => false,
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
