//! The turn controller state machine
//!
//! ```text
//! NotStarted --start--> InProgress <--pause/resume--> Paused
//!                           |
//!                           +--king captured / side has no moves--> Over
//!                              (a human side with only self-checking moves has none)
//! Over --start--> InProgress          any --reset--> NotStarted
//! ```
//!
//! A computer move that falls due while the game is paused is deferred and
//! played on `resume`.

use minichess_core::{
    all_moves, apply_move, leaves_king_in_check, legal_moves, safe_moves, Board, Color, Engine,
    LayoutError, Move, MoveError, MoveRecord, Piece, Square,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::events::{GameEvent, GameObserver};
use crate::state::{Destination, GameSnapshot, GameState, MoveOutcome, Status};

/// A lifecycle command issued in a state that does not allow it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("cannot {action} while the game is {status}")]
    InvalidTransition { action: &'static str, status: Status },
}

/// One game of 5x5 chess, plus the opponent that plays the computer side.
pub struct Game {
    config: GameConfig,
    initial: Board,
    state: GameState,
    engine: Box<dyn Engine>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("engine", &self.engine.name())
            .finish()
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, LayoutError> {
        let engine = config.build_engine();
        Self::with_engine(config, engine)
    }

    /// Create with a caller-supplied opponent
    pub fn with_engine(config: GameConfig, engine: Box<dyn Engine>) -> Result<Self, LayoutError> {
        let initial = config.initial_board()?;
        Ok(Self {
            config,
            initial,
            state: GameState::new(initial),
            engine,
            observers: Vec::new(),
        })
    }

    /// Register an observer for every subsequent event
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.state)
    }

    pub fn move_log(&self) -> &[MoveRecord] {
        &self.state.moves
    }

    pub fn captured_by(&self, color: Color) -> Vec<Piece> {
        self.state.captured_by(color)
    }

    /// Whether `submit_move` and `resume` play the computer's reply themselves
    pub fn set_auto_reply(&mut self, on: bool) {
        self.config.auto_reply = on;
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Whether the computer plays the side currently to move
    pub fn computer_to_move(&self) -> bool {
        self.config.computer_side() == Some(self.state.side_to_move)
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Lay out a fresh board with White to move.
    pub fn start(&mut self) -> Result<(), ControlError> {
        match self.state.status {
            Status::NotStarted | Status::Over { .. } => {}
            status => {
                return Err(ControlError::InvalidTransition {
                    action: "start",
                    status,
                })
            }
        }

        self.state = GameState::new(self.initial);
        self.state.status = Status::InProgress;
        self.engine.new_game();
        info!(layout = %self.initial.to_layout(), mode = ?self.config.mode, "game started");
        self.emit(GameEvent::Started);
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), ControlError> {
        if self.state.status != Status::InProgress {
            return Err(ControlError::InvalidTransition {
                action: "pause",
                status: self.state.status,
            });
        }
        self.state.status = Status::Paused;
        info!("game paused");
        self.emit(GameEvent::Paused);
        Ok(())
    }

    /// Resume play. A computer move that was due when the game was paused is
    /// played now (when `auto_reply` is on) and returned.
    pub fn resume(&mut self) -> Result<Option<MoveRecord>, ControlError> {
        if self.state.status != Status::Paused {
            return Err(ControlError::InvalidTransition {
                action: "resume",
                status: self.state.status,
            });
        }
        self.state.status = Status::InProgress;
        info!("game resumed");
        self.emit(GameEvent::Resumed);

        if self.config.auto_reply && self.computer_to_move() {
            return Ok(self.run_opponent());
        }
        Ok(None)
    }

    /// Back to NotStarted with an empty log and the initial layout.
    pub fn reset(&mut self) {
        self.state = GameState::new(self.initial);
        self.engine.new_game();
        info!("game reset");
        self.emit(GameEvent::Reset);
    }

    // -------------------------------------------------------------------------
    // Moves
    // -------------------------------------------------------------------------

    /// Submit a human move.
    ///
    /// On rejection the state is unchanged, a `MoveRejected` event is emitted
    /// and the reason is returned.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if let Err(reason) = self.validate_human_move(from, to) {
            debug!(%from, %to, %reason, "move rejected");
            self.emit(GameEvent::MoveRejected {
                from,
                to,
                reason: reason.clone(),
            });
            return Err(reason);
        }

        let human = self.commit(from, to)?;

        let reply = if self.state.status == Status::InProgress
            && self.config.auto_reply
            && self.computer_to_move()
        {
            self.run_opponent()
        } else {
            None
        };

        Ok(MoveOutcome {
            human,
            reply,
            status: self.state.status,
        })
    }

    /// Submit a human move from raw coordinates.
    pub fn submit_coords(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<MoveOutcome, MoveError> {
        let from = Square::try_new(from.0, from.1)?;
        let to = Square::try_new(to.0, to.1)?;
        self.submit_move(from, to)
    }

    /// Let the computer play its pending move, for presentation layers that
    /// pace the reply themselves. Returns `Ok(None)` when it is not the
    /// computer's turn or it had no move (which ends the game).
    pub fn play_opponent_move(&mut self) -> Result<Option<MoveRecord>, MoveError> {
        if self.state.status != Status::InProgress {
            return Err(MoveError::GameNotInProgress);
        }
        if !self.computer_to_move() {
            return Ok(None);
        }
        Ok(self.run_opponent())
    }

    /// Where the piece on `from` may go, for highlighting. Empty unless the
    /// game is in progress and the piece belongs to a human side to move.
    pub fn destinations(&self, from: Square) -> Vec<Destination> {
        if self.state.status != Status::InProgress || self.computer_to_move() {
            return Vec::new();
        }
        let board = &self.state.board;
        let side = self.state.side_to_move;
        match board.piece_at(from) {
            Some(pc) if pc.color == side => {}
            _ => return Vec::new(),
        }

        legal_moves(board, from)
            .into_iter()
            .filter(|&to| !leaves_king_in_check(board, Move::new(from, to), side))
            .map(|to| Destination {
                square: to,
                is_capture: board.piece_at(to).is_some(),
            })
            .collect()
    }

    fn validate_human_move(&self, from: Square, to: Square) -> Result<(), MoveError> {
        if self.state.status != Status::InProgress {
            return Err(MoveError::GameNotInProgress);
        }
        if self.computer_to_move() {
            return Err(MoveError::OpponentToMove);
        }

        let board = &self.state.board;
        let side = self.state.side_to_move;
        let piece = board
            .piece_at(from)
            .ok_or(MoveError::EmptySquareSelected(from))?;
        if piece.color != side {
            return Err(MoveError::WrongSideOwnsSquare {
                square: from,
                owner: piece.color,
                to_move: side,
            });
        }
        if !legal_moves(board, from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        if leaves_king_in_check(board, Move::new(from, to), side) {
            return Err(MoveError::MoveLeavesKingInCheck { from, to });
        }
        Ok(())
    }

    /// Apply a validated move, log it, flip the turn and detect the end.
    fn commit(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let (board, record) = apply_move(&self.state.board, from, to)?;
        self.state.board = board;
        self.state.moves.push(record);
        debug!(%record, "move applied");
        self.emit(GameEvent::MoveApplied(record));

        let mover = record.mover;
        self.state.side_to_move = mover.other();

        // Losing the king, or having no move at all, loses the game
        if record.captured_king() || self.side_to_move_is_stuck() {
            self.finish(mover);
        }
        Ok(record)
    }

    /// A human side is stuck once every move it could submit would be
    /// rejected for self-check. The computer still has its forced fallback,
    /// so only an empty generator stops it.
    fn side_to_move_is_stuck(&self) -> bool {
        let board = &self.state.board;
        let side = self.state.side_to_move;
        if self.computer_to_move() {
            all_moves(board, side).is_empty()
        } else {
            safe_moves(board, side).is_empty()
        }
    }

    fn run_opponent(&mut self) -> Option<MoveRecord> {
        let side = self.state.side_to_move;
        // The engine only ever sees a copy of the board
        let board = self.state.board;
        let result = self.engine.choose_move(&board, side);
        debug!(engine = self.engine.name(), nodes = result.nodes, score = result.score, "opponent searched");

        match result.best_move {
            Some(mv) => match self.commit(mv.from, mv.to) {
                Ok(record) => Some(record),
                Err(err) => {
                    // Only reachable if an engine proposes a move from an empty square
                    debug!(%err, %mv, "opponent proposed an unplayable move");
                    self.finish(side.other());
                    None
                }
            },
            None => {
                self.finish(side.other());
                None
            }
        }
    }

    fn finish(&mut self, winner: Color) {
        self.state.status = Status::Over { winner };
        info!(%winner, moves = self.state.moves.len(), "game over");
        self.emit(GameEvent::GameOver { winner });
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
