//! Weapon tokens and the rooms that hold them.
//!
//! There are more rooms than weapons, so some rooms are always empty. A
//! weapon is in at most one room at a time; `swap` keeps that true.

use serde::{Deserialize, Serialize};

use crate::cards::{Room, Vocabulary, Weapon, ROOM_COUNT};
use crate::core::GameRng;

/// Room → weapon mapping, array-backed by `Room::index()`.
///
/// ## Usage
///
/// ```
/// use rust_cluedo::cards::{Room, Weapon};
/// use rust_cluedo::zones::WeaponPlacement;
///
/// let mut placement = WeaponPlacement::empty();
/// placement.place(Room::Kitchen, Weapon::Dagger);
/// placement.place(Room::Lounge, Weapon::Rope);
///
/// // Suggesting the Dagger in the Lounge exchanges the two tokens
/// placement.swap(Room::Lounge, Weapon::Dagger);
/// assert_eq!(placement.weapon_in(Room::Lounge), Some(Weapon::Dagger));
/// assert_eq!(placement.weapon_in(Room::Kitchen), Some(Weapon::Rope));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponPlacement {
    slots: [Option<Weapon>; ROOM_COUNT],
}

impl WeaponPlacement {
    /// No weapon in any room.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shuffle rooms and weapons independently and pair them off until the
    /// weapons run out. Unmatched rooms hold nothing.
    pub fn scatter(vocabulary: &Vocabulary, rng: &mut GameRng) -> Self {
        let mut rooms = vocabulary.rooms.to_vec();
        let mut weapons = vocabulary.weapons.to_vec();
        rng.shuffle(&mut rooms);
        rng.shuffle(&mut weapons);

        let mut placement = Self::empty();
        for (room, weapon) in rooms.into_iter().zip(weapons) {
            placement.slots[room.index()] = Some(weapon);
        }
        placement
    }

    /// Put `weapon` in `room` during setup, removing it from wherever it was.
    ///
    /// Whatever `room` held before is dropped. Use `swap` during play.
    pub fn place(&mut self, room: Room, weapon: Weapon) {
        if let Some(old) = self.room_of(weapon) {
            self.slots[old.index()] = None;
        }
        self.slots[room.index()] = Some(weapon);
    }

    /// The weapon currently in `room`.
    #[must_use]
    pub fn weapon_in(&self, room: Room) -> Option<Weapon> {
        self.slots[room.index()]
    }

    /// The room currently holding `weapon`.
    #[must_use]
    pub fn room_of(&self, weapon: Weapon) -> Option<Room> {
        Room::ALL
            .into_iter()
            .find(|r| self.slots[r.index()] == Some(weapon))
    }

    /// Bring `weapon` into `room`, exchanging it with whatever was there.
    ///
    /// The room's previous weapon moves to the room `weapon` came from. If
    /// `weapon` was in no room, the previous occupant goes nowhere.
    /// Returns the room `weapon` came from.
    pub fn swap(&mut self, room: Room, weapon: Weapon) -> Option<Room> {
        let from = self.room_of(weapon);
        if from == Some(room) {
            return from;
        }

        let displaced = self.slots[room.index()];
        if let Some(from) = from {
            self.slots[from.index()] = displaced;
        }
        self.slots[room.index()] = Some(weapon);
        from
    }

    /// (room, weapon) pairs for every room that holds one, in room order.
    pub fn iter(&self) -> impl Iterator<Item = (Room, Weapon)> + '_ {
        Room::ALL
            .into_iter()
            .filter_map(|r| self.slots[r.index()].map(|w| (r, w)))
    }

    /// Whether every weapon appears in at most one room.
    #[must_use]
    pub fn is_injective(&self) -> bool {
        let mut seen: Vec<Weapon> = Vec::with_capacity(ROOM_COUNT);
        for weapon in self.slots.iter().flatten() {
            if seen.contains(weapon) {
                return false;
            }
            seen.push(*weapon);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_places_every_weapon_once() {
        let mut rng = GameRng::new(5);
        let placement = WeaponPlacement::scatter(&Vocabulary::STANDARD, &mut rng);

        assert_eq!(placement.iter().count(), 6);
        assert!(placement.is_injective());
        for weapon in Weapon::ALL {
            assert!(placement.room_of(weapon).is_some());
        }
    }

    #[test]
    fn test_swap_into_empty_room() {
        let mut placement = WeaponPlacement::empty();
        placement.place(Room::Hall, Weapon::Spanner);

        let from = placement.swap(Room::Study, Weapon::Spanner);

        assert_eq!(from, Some(Room::Hall));
        assert_eq!(placement.weapon_in(Room::Study), Some(Weapon::Spanner));
        assert_eq!(placement.weapon_in(Room::Hall), None);
    }

    #[test]
    fn test_swap_same_room_is_noop() {
        let mut placement = WeaponPlacement::empty();
        placement.place(Room::Hall, Weapon::Spanner);
        let before = placement.clone();

        assert_eq!(placement.swap(Room::Hall, Weapon::Spanner), Some(Room::Hall));
        assert_eq!(placement, before);
    }

    #[test]
    fn test_swap_unplaced_weapon_drops_occupant() {
        let mut placement = WeaponPlacement::empty();
        placement.place(Room::Library, Weapon::Revolver);

        let from = placement.swap(Room::Library, Weapon::Candlestick);

        assert_eq!(from, None);
        assert_eq!(placement.weapon_in(Room::Library), Some(Weapon::Candlestick));
        assert_eq!(placement.room_of(Weapon::Revolver), None);
        assert!(placement.is_injective());
    }

    #[test]
    fn test_place_moves_existing_token() {
        let mut placement = WeaponPlacement::empty();
        placement.place(Room::Kitchen, Weapon::Rope);
        placement.place(Room::Lounge, Weapon::Rope);

        assert_eq!(placement.weapon_in(Room::Kitchen), None);
        assert_eq!(placement.room_of(Weapon::Rope), Some(Room::Lounge));
    }
}
