//! The hidden solution triple.

use std::fmt;

use super::card::Card;
use super::vocabulary::{Room, Suspect, Vocabulary, Weapon};
use crate::core::GameRng;

/// One suspect, one weapon and one room withheld from the deal.
///
/// The contents are only ever compared against; nothing reads them out
/// during play.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SolutionEnvelope {
    suspect: Suspect,
    weapon: Weapon,
    room: Room,
}

impl SolutionEnvelope {
    /// Seal a specific solution.
    #[must_use]
    pub const fn new(suspect: Suspect, weapon: Weapon, room: Room) -> Self {
        Self { suspect, weapon, room }
    }

    /// Draw a uniformly random solution from `vocabulary`.
    ///
    /// Returns `None` only if one of the vocabulary lists is empty.
    pub fn draw(vocabulary: &Vocabulary, rng: &mut GameRng) -> Option<Self> {
        Some(Self {
            suspect: *rng.choose(vocabulary.suspects)?,
            weapon: *rng.choose(vocabulary.weapons)?,
            room: *rng.choose(vocabulary.rooms)?,
        })
    }

    /// Exact identity comparison of all three parts.
    #[must_use]
    pub fn matches(&self, suspect: Suspect, weapon: Weapon, room: Room) -> bool {
        self.suspect == suspect && self.weapon == weapon && self.room == room
    }

    /// Whether `card` is one of the three sealed cards.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        match card {
            Card::Suspect(s) => s == self.suspect,
            Card::Weapon(w) => w == self.weapon,
            Card::Room(r) => r == self.room,
        }
    }
}

impl fmt::Debug for SolutionEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolutionEnvelope").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_requires_all_three() {
        let env = SolutionEnvelope::new(Suspect::MissScarlett, Weapon::Dagger, Room::Lounge);

        assert!(env.matches(Suspect::MissScarlett, Weapon::Dagger, Room::Lounge));
        assert!(!env.matches(Suspect::MrsWhite, Weapon::Dagger, Room::Lounge));
        assert!(!env.matches(Suspect::MissScarlett, Weapon::Rope, Room::Lounge));
        assert!(!env.matches(Suspect::MissScarlett, Weapon::Dagger, Room::Hall));
    }

    #[test]
    fn test_draw_contains_one_of_each() {
        let mut rng = GameRng::new(11);
        let env = SolutionEnvelope::draw(&Vocabulary::STANDARD, &mut rng).unwrap();
        let sealed = Card::deck(&Vocabulary::STANDARD)
            .into_iter()
            .filter(|c| env.contains(*c))
            .count();
        assert_eq!(sealed, 3);
    }

    #[test]
    fn test_debug_hides_contents() {
        let env = SolutionEnvelope::new(Suspect::MissScarlett, Weapon::Dagger, Room::Lounge);
        let shown = format!("{env:?}");

        assert_eq!(shown, "SolutionEnvelope { .. }");
        for name in ["Scarlett", "Dagger", "Lounge"] {
            assert!(!shown.contains(name));
        }
    }
}
