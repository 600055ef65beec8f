//! A single card from one of the three vocabularies.

use serde::{Deserialize, Serialize};

use super::vocabulary::{Room, Suspect, Vocabulary, Weapon};

/// Which vocabulary a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Suspect,
    Weapon,
    Room,
}

/// A card. Two cards are equal iff they carry the same canonical name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name")]
pub enum Card {
    Suspect(Suspect),
    Weapon(Weapon),
    Room(Room),
}

impl Card {
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            Card::Suspect(_) => CardKind::Suspect,
            Card::Weapon(_) => CardKind::Weapon,
            Card::Room(_) => CardKind::Room,
        }
    }

    /// Canonical name of the card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Suspect(s) => s.name(),
            Card::Weapon(w) => w.name(),
            Card::Room(r) => r.name(),
        }
    }

    /// Look up a card by canonical name across all three vocabularies.
    ///
    /// The vocabularies are disjoint, so at most one card matches.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Card> {
        Suspect::from_name(name)
            .map(Card::Suspect)
            .or_else(|| Weapon::from_name(name).map(Card::Weapon))
            .or_else(|| Room::from_name(name).map(Card::Room))
    }

    /// Every card of a vocabulary: suspects, then weapons, then rooms.
    #[must_use]
    pub fn deck(vocabulary: &Vocabulary) -> Vec<Card> {
        let mut deck = Vec::with_capacity(vocabulary.card_count());
        deck.extend(vocabulary.suspects.iter().copied().map(Card::Suspect));
        deck.extend(vocabulary.weapons.iter().copied().map(Card::Weapon));
        deck.extend(vocabulary.rooms.iter().copied().map(Card::Room));
        deck
    }
}

impl From<Suspect> for Card {
    fn from(s: Suspect) -> Self {
        Card::Suspect(s)
    }
}

impl From<Weapon> for Card {
    fn from(w: Weapon) -> Self {
        Card::Weapon(w)
    }
}

impl From<Room> for Card {
    fn from(r: Room) -> Self {
        Card::Room(r)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Suspect(s) => write!(f, "CHRCTR: {}", s),
            Card::Weapon(w) => write!(f, "WPN: {}", w),
            Card::Room(r) => write!(f, "RM: {}", r),
        }
    }
}
