//! Game state and the read-only views handed to the presentation layer

use std::fmt;

use minichess_core::{Board, Color, MoveRecord, Piece, Square};
use serde::{Deserialize, Serialize};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum Status {
    NotStarted,
    InProgress,
    Paused,
    Over { winner: Color },
}

impl Status {
    pub fn is_over(self) -> bool {
        matches!(self, Status::Over { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NotStarted => write!(f, "not started"),
            Status::InProgress => write!(f, "in progress"),
            Status::Paused => write!(f, "paused"),
            Status::Over { winner } => write!(f, "over, {winner} wins"),
        }
    }
}

/// Represents the current state of a game
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current board
    pub board: Board,
    pub side_to_move: Color,
    pub status: Status,
    /// Applied moves, oldest first
    pub moves: Vec<MoveRecord>,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            side_to_move: Color::White,
            status: Status::NotStarted,
            moves: Vec::new(),
        }
    }

    /// Pieces `color` has taken so far, in capture order
    pub fn captured_by(&self, color: Color) -> Vec<Piece> {
        self.moves
            .iter()
            .filter(|rec| rec.mover == color)
            .filter_map(|rec| rec.captured)
            .collect()
    }
}

/// Point-in-time copy of the state for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub side_to_move: Color,
    pub status: Status,
    /// Last move (for highlighting)
    pub last_move: Option<MoveRecord>,
    pub move_count: usize,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board,
            side_to_move: state.side_to_move,
            status: state.status,
            last_move: state.moves.last().copied(),
            move_count: state.moves.len(),
        }
    }
}

/// A highlighted destination for a selected piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub square: Square,
    /// The destination holds an enemy piece
    pub is_capture: bool,
}

/// What a successful human move produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub human: MoveRecord,
    /// The computer's answer, when it was played right away
    pub reply: Option<MoveRecord>,
    /// Status after both moves
    pub status: Status,
}
