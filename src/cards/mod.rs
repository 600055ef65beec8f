//! Card system: vocabularies, cards, and the solution envelope.
//!
//! ## Key Types
//!
//! - `Suspect`, `Weapon`, `Room`: the three fixed vocabularies
//! - `Vocabulary`: the lists a game is dealt from
//! - `Card`: one card of any kind, compared by canonical name
//! - `SolutionEnvelope`: the withheld triple

pub mod card;
pub mod envelope;
pub mod vocabulary;

pub use card::{Card, CardKind};
pub use envelope::SolutionEnvelope;
pub use vocabulary::{Room, Suspect, Vocabulary, Weapon, ROOM_COUNT};
