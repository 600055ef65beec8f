//! Suggestion resolution: summon the suspect, bring the weapon, ask around.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, Room, Suspect, Weapon};
use crate::core::{GameState, SeatId};

/// A seat that showed the suggester a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refutation {
    pub seat: SeatId,
    /// Shown to the suggester only; other seats learn just `seat`.
    pub card: Card,
}

/// Everything a suggestion changed or learned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionOutcome {
    /// Seat portraying the named suspect, if it was moved into the room.
    pub summoned: Option<SeatId>,
    /// Room the named weapon was taken from, if it was in one.
    pub weapon_from: Option<Room>,
    /// First seat after the suggester able to refute, if any.
    pub refutation: Option<Refutation>,
}

impl SuggestionOutcome {
    #[must_use]
    pub fn is_refuted(&self) -> bool {
        self.refutation.is_some()
    }
}

/// Applies a suggestion to the game state.
///
/// In order:
/// 1. The seat portraying `suspect` (looked up by identity, so the
///    suggester may name themselves) is teleported into `room`.
/// 2. `weapon` is swapped into `room`.
/// 3. Seats after the suggester are asked in forward order, wrapping and
///    including eliminated seats. The first whose hand matches stops the
///    scan and shows its first matching card (suspect, then weapon, then
///    room).
///
/// The caller guarantees the suggester is standing in `room`.
pub struct SuggestionResolver;

impl SuggestionResolver {
    pub fn resolve(
        state: &mut GameState,
        suggester: SeatId,
        suspect: Suspect,
        weapon: Weapon,
        room: Room,
    ) -> SuggestionOutcome {
        let summoned = match state.roster.seat_of(suspect) {
            Some(seat) if state.board.teleport_move(seat, room) => Some(seat),
            _ => None,
        };

        let weapon_from = state.weapons.swap(room, weapon);
        debug!(%weapon, %room, from = ?weapon_from, "weapon moved");

        let refutation = Self::refute(state, suggester, suspect, weapon, room);
        match refutation {
            Some(r) => debug!(%suggester, refuter = %r.seat, "suggestion refuted"),
            None => debug!(%suggester, "suggestion unrefuted"),
        }

        SuggestionOutcome {
            summoned,
            weapon_from,
            refutation,
        }
    }

    /// The refutation scan alone, without moving anything.
    #[must_use]
    pub fn refute(
        state: &GameState,
        suggester: SeatId,
        suspect: Suspect,
        weapon: Weapon,
        room: Room,
    ) -> Option<Refutation> {
        state.roster.seats_after(suggester).find_map(|seat| {
            state
                .roster
                .get(seat)?
                .refuting_card(suspect, weapon, room)
                .map(|card| Refutation { seat, card })
        })
    }
}
