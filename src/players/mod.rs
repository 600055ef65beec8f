//! Players and the seat roster.
//!
//! ## Key Types
//!
//! - `Player`: portrayed suspect, hand, active flag
//! - `PlayerRoster`: seats in fixed order, dealing, elimination, seat walks

pub mod player;
pub mod roster;

pub use player::Player;
pub use roster::PlayerRoster;
