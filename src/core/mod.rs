//! Core engine types: seats, state, actions, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these; nothing here knows about
//! turn phases.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionKind, ActionRecord, TurnAction};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use player::{SeatId, SeatMap, MAX_SEATS};
pub use rng::{GameRng, DIE_FACES};
pub use state::GameState;
