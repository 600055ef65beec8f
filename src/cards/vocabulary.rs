//! The three fixed card vocabularies: suspects, weapons, rooms.
//!
//! Identity is the canonical name string. Each vocabulary is an enum for
//! cheap comparison, and `name()`/`from_name()` round-trip exactly to the
//! canonical string. Serde uses the same strings.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::GameError;

/// A suspect card and the character a seat portrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suspect {
    #[serde(rename = "Miss Scarlett")]
    MissScarlett,
    #[serde(rename = "Colonel Mustard")]
    ColonelMustard,
    #[serde(rename = "Mrs. White")]
    MrsWhite,
    #[serde(rename = "The Reverend Green")]
    ReverendGreen,
    #[serde(rename = "Mrs. Peacock")]
    MrsPeacock,
    #[serde(rename = "Professor Plum")]
    ProfessorPlum,
}

impl Suspect {
    /// All suspects in menu order.
    pub const ALL: [Suspect; 6] = [
        Suspect::MissScarlett,
        Suspect::ColonelMustard,
        Suspect::MrsWhite,
        Suspect::ReverendGreen,
        Suspect::MrsPeacock,
        Suspect::ProfessorPlum,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suspect::MissScarlett => "Miss Scarlett",
            Suspect::ColonelMustard => "Colonel Mustard",
            Suspect::MrsWhite => "Mrs. White",
            Suspect::ReverendGreen => "The Reverend Green",
            Suspect::MrsPeacock => "Mrs. Peacock",
            Suspect::ProfessorPlum => "Professor Plum",
        }
    }

    /// Look up a suspect by exact canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Suspect> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// A weapon card and the matching token that moves between rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weapon {
    Candlestick,
    Dagger,
    #[serde(rename = "Lead Pipe")]
    LeadPipe,
    Revolver,
    Rope,
    Spanner,
}

impl Weapon {
    /// All weapons in menu order.
    pub const ALL: [Weapon; 6] = [
        Weapon::Candlestick,
        Weapon::Dagger,
        Weapon::LeadPipe,
        Weapon::Revolver,
        Weapon::Rope,
        Weapon::Spanner,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Weapon::Candlestick => "Candlestick",
            Weapon::Dagger => "Dagger",
            Weapon::LeadPipe => "Lead Pipe",
            Weapon::Revolver => "Revolver",
            Weapon::Rope => "Rope",
            Weapon::Spanner => "Spanner",
        }
    }

    /// Look up a weapon by exact canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Weapon> {
        Self::ALL.into_iter().find(|w| w.name() == name)
    }
}

/// A room card and the board region carrying the same name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Room {
    Kitchen,
    #[serde(rename = "Ball Room")]
    BallRoom,
    Conservatory,
    #[serde(rename = "Billiard Room")]
    BilliardRoom,
    Library,
    Study,
    Hall,
    Lounge,
    #[serde(rename = "Dining Room")]
    DiningRoom,
}

/// Number of rooms on the board.
pub const ROOM_COUNT: usize = 9;

impl Room {
    /// All rooms in menu order. `Room as usize` indexes this array.
    pub const ALL: [Room; ROOM_COUNT] = [
        Room::Kitchen,
        Room::BallRoom,
        Room::Conservatory,
        Room::BilliardRoom,
        Room::Library,
        Room::Study,
        Room::Hall,
        Room::Lounge,
        Room::DiningRoom,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Room::Kitchen => "Kitchen",
            Room::BallRoom => "Ball Room",
            Room::Conservatory => "Conservatory",
            Room::BilliardRoom => "Billiard Room",
            Room::Library => "Library",
            Room::Study => "Study",
            Room::Hall => "Hall",
            Room::Lounge => "Lounge",
            Room::DiningRoom => "Dining Room",
        }
    }

    /// Two-letter board code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Room::Kitchen => "KC",
            Room::BallRoom => "BR",
            Room::Conservatory => "CV",
            Room::BilliardRoom => "BL",
            Room::Library => "LB",
            Room::Study => "SD",
            Room::Hall => "HL",
            Room::Lounge => "LN",
            Room::DiningRoom => "DR",
        }
    }

    /// Look up a room by exact canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Room> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    /// Look up a room by its two-letter board code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Room> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }

    /// Dense index for array-backed per-room tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

macro_rules! name_impls {
    ($ty:ty, $kind:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = GameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::from_name(s).ok_or_else(|| GameError::UnknownName {
                    kind: $kind,
                    name: s.to_string(),
                })
            }
        }
    };
}

name_impls!(Suspect, "suspect");
name_impls!(Weapon, "weapon");
name_impls!(Room, "room");

/// The vocabulary a game is dealt from.
///
/// Passed into setup rather than read from globals. `Vocabulary::STANDARD`
/// is the full 6/6/9 set; the order of each list is the menu order and the
/// order the deck is assembled in before shuffling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    pub suspects: &'static [Suspect],
    pub weapons: &'static [Weapon],
    pub rooms: &'static [Room],
}

impl Vocabulary {
    /// The complete standard vocabulary.
    pub const STANDARD: Vocabulary = Vocabulary {
        suspects: &Suspect::ALL,
        weapons: &Weapon::ALL,
        rooms: &Room::ALL,
    };

    /// Total number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.suspects.len() + self.weapons.len() + self.rooms.len()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::STANDARD
    }
}
