//! Error types for the rules layer.
//!
//! Every variant is recoverable: callers reject the request and keep their
//! state unchanged.

use thiserror::Error;

use crate::types::{Color, Square};

/// Why a submitted move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("square {row},{col} is off the board")]
    InvalidSquare { row: i32, col: i32 },

    #[error("cannot parse square from {0:?}")]
    UnparsableSquare(String),

    #[error("no piece on {0}")]
    EmptySquareSelected(Square),

    #[error("piece on {square} belongs to {owner}, not {to_move}")]
    WrongSideOwnsSquare {
        square: Square,
        owner: Color,
        to_move: Color,
    },

    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination { from: Square, to: Square },

    #[error("moving {from} to {to} would leave the king in check")]
    MoveLeavesKingInCheck { from: Square, to: Square },

    #[error("game is not in progress")]
    GameNotInProgress,

    #[error("waiting for the computer to move")]
    OpponentToMove,
}

/// Why a layout string could not be turned into a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("expected 5 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} covers {width} squares, expected 5")]
    RowWidth { row: usize, width: usize },

    #[error("unknown piece letter {0:?}")]
    UnknownPiece(char),

    #[error("{0} has more than one king")]
    ExtraKing(Color),
}
