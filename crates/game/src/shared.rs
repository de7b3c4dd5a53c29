//! Thread-safe handle for serving one game to several callers

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::controller::Game;
use crate::state::GameSnapshot;

/// Cloneable handle that serializes every access to one [`Game`].
///
/// Move validation and execution span several steps, so callers get the whole
/// game for the duration of a closure rather than field-level locking.
#[derive(Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Run `f` with exclusive access to the game
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, Game> {
        // Transitions only write state after validation, so a poisoned lock is usable
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
