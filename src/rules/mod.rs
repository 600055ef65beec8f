//! Game rules: suggestion and accusation resolution and the turn engine.
//!
//! The resolvers operate on a borrowed [`GameState`](crate::core::GameState)
//! and never decide whose turn it is; `TurnEngine` owns that.

pub mod accusation;
pub mod engine;
pub mod suggestion;

pub use accusation::{AccusationOutcome, AccusationResolver};
pub use engine::{ActionOutcome, GameResult, TurnEngine, TurnInput, TurnPhase, TurnView};
pub use suggestion::{Refutation, SuggestionOutcome, SuggestionResolver};
