//! Turn actions and the history records they leave behind.
//!
//! An acting seat picks one [`TurnAction`] at a time. Which kinds are on
//! offer depends on where the seat stands right now; the engine re-derives
//! the set before every choice and reports it as [`ActionKind`]s.

use serde::{Deserialize, Serialize};

use super::player::SeatId;
use crate::board::Coord;
use crate::cards::{Room, Suspect, Weapon};

/// One choice made by the acting seat.
///
/// ```
/// use rust_cluedo::board::Coord;
/// use rust_cluedo::cards::{Suspect, Weapon};
/// use rust_cluedo::core::{ActionKind, TurnAction};
///
/// let step = TurnAction::Step(Coord::new(16, 5));
/// assert_eq!(step.kind(), ActionKind::Step);
/// assert!(!step.is_free());
///
/// let suggest = TurnAction::Suggest {
///     suspect: Suspect::ProfessorPlum,
///     weapon: Weapon::Rope,
/// };
/// assert!(suggest.is_free());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TurnAction {
    /// Look at one's own hand.
    ViewHand,

    /// Move one cell to an adjacent destination.
    Step(Coord),

    /// Suggest a suspect and weapon for the room the seat is in.
    Suggest { suspect: Suspect, weapon: Weapon },

    /// Final claim of the full solution.
    Accuse {
        suspect: Suspect,
        weapon: Weapon,
        room: Room,
    },
}

impl TurnAction {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            TurnAction::ViewHand => ActionKind::ViewHand,
            TurnAction::Step(_) => ActionKind::Step,
            TurnAction::Suggest { .. } => ActionKind::Suggest,
            TurnAction::Accuse { .. } => ActionKind::Accuse,
        }
    }

    /// True if the action leaves the move budget untouched.
    #[must_use]
    pub fn is_free(&self) -> bool {
        matches!(self, TurnAction::ViewHand | TurnAction::Suggest { .. })
    }
}

/// Menu entry for a kind of action, without its arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ViewHand,
    Step,
    Suggest,
    Accuse,
}

impl ActionKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ActionKind::ViewHand => "view hand",
            ActionKind::Step => "step",
            ActionKind::Suggest => "suggest",
            ActionKind::Accuse => "accuse",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging; the history is append-only for the
/// lifetime of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub seat: SeatId,

    /// The action taken.
    pub action: TurnAction,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(seat: SeatId, action: TurnAction, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            action,
            turn,
            sequence,
        }
    }
}
