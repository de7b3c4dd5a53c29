//! Turn controller for 5x5 chess.
//!
//! This crate owns the game state machine:
//! - Validating and applying human moves
//! - Triggering the computer opponent on its turn
//! - Detecting the end of the game (king capture, or no moves left)
//! - Notifying a presentation layer of every transition

mod config;
mod controller;
mod events;
mod shared;
mod state;

pub use config::*;
pub use controller::*;
pub use events::*;
pub use shared::*;
pub use state::*;
