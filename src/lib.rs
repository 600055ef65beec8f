//! # rust-cluedo
//!
//! A turn-based deduction game engine: up to six seats move around a
//! mansion board, suggest suspect/weapon/room combinations, refute each
//! other from their hands, and make one accusation each to try to name the
//! contents of a hidden envelope.
//!
//! ## Design Principles
//!
//! 1. **One Owned Aggregate**: board, weapons, roster and envelope live in a
//!    single `GameState` that the turn engine passes by reference into the
//!    resolvers. No globals, no shared mutability.
//!
//! 2. **Declarative Topology**: the board is built from a `BoardLayout` of
//!    cell descriptors and doorway tables, not from inline branching.
//!
//! 3. **Identity by Canonical Name**: cards are enums internally but
//!    display, parse and serialize as their exact canonical strings.
//!
//! ## Modules
//!
//! - `core`: Seats, state, actions, RNG, configuration, errors
//! - `board`: Cells, layout tables, adjacency graph and occupancy
//! - `cards`: Vocabularies, cards and the solution envelope
//! - `zones`: Weapon placement across rooms
//! - `players`: Players and the seat roster
//! - `rules`: Suggestion and accusation resolution, the turn engine

pub mod board;
pub mod cards;
pub mod core;
pub mod players;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, ActionRecord, GameConfig, GameError, GameRng, GameState, SeatId, SeatMap,
    TurnAction,
};

pub use crate::board::{BoardGraph, BoardLayout, Cell, CellKind, Coord};

pub use crate::cards::{Card, CardKind, Room, SolutionEnvelope, Suspect, Vocabulary, Weapon};

pub use crate::players::{Player, PlayerRoster};

pub use crate::zones::WeaponPlacement;

pub use crate::rules::{
    AccusationOutcome, AccusationResolver, ActionOutcome, GameResult, Refutation,
    SuggestionOutcome, SuggestionResolver, TurnEngine, TurnInput, TurnPhase, TurnView,
};
