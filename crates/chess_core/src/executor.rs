use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{board::Board, error::MoveError, types::*};

/// One applied move. Never mutated once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub mover: Color,
}

impl MoveRecord {
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }

    pub fn captured_king(&self) -> bool {
        matches!(self.captured, Some(pc) if pc.kind == PieceKind::King)
    }
}

impl fmt::Display for MoveRecord {
    /// `WHITE: ♙ 3-1 → 2-1 (captured ♟)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {} → {}", self.mover, self.piece, self.from, self.to)?;
        if let Some(cap) = self.captured {
            write!(f, " (captured {cap})")?;
        }
        Ok(())
    }
}

/// Moves the piece on `from` to `to`, capturing whatever stood on `to`.
///
/// Pure: the input board is left untouched. Legality is the caller's concern;
/// only the mechanics are performed here, and the only failure is an empty
/// `from` square.
pub fn apply_move(board: &Board, from: Square, to: Square) -> Result<(Board, MoveRecord), MoveError> {
    let piece = board
        .piece_at(from)
        .ok_or(MoveError::EmptySquareSelected(from))?;
    let captured = board.piece_at(to);

    let mut next = *board;
    next.set_piece(from, None);
    next.set_piece(to, Some(piece));

    let record = MoveRecord {
        from,
        to,
        piece,
        captured,
        mover: piece.color,
    };
    Ok((next, record))
}

/// Reverses `record` on `board`, restoring any captured piece.
pub fn undo_move(board: &Board, record: &MoveRecord) -> Board {
    let mut prev = *board;
    prev.set_piece(record.from, Some(record.piece));
    prev.set_piece(record.to, record.captured);
    prev
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod executor_tests;
