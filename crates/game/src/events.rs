//! Notifications for the presentation layer

use minichess_core::{Color, MoveError, MoveRecord, Square};

/// A state transition the presentation layer may want to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    Reset,
    MoveApplied(MoveRecord),
    MoveRejected {
        from: Square,
        to: Square,
        reason: MoveError,
    },
    GameOver {
        winner: Color,
    },
}

/// Receives every [`GameEvent`], in order, synchronously.
pub trait GameObserver: Send {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}
