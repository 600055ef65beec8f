//! A seated player: identity, hand, and whether they still take turns.

use rustc_hash::FxHashSet;

use crate::cards::{Card, Room, Suspect, Weapon};
use crate::core::SeatId;

/// One seat at the table.
///
/// The seat's position on the board lives in the
/// [`BoardGraph`](crate::board::BoardGraph); everything else about the
/// player lives here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    seat: SeatId,
    suspect: Suspect,
    active: bool,
    hand: FxHashSet<Card>,
}

impl Player {
    #[must_use]
    pub fn new(seat: SeatId, suspect: Suspect) -> Self {
        Self {
            seat,
            suspect,
            active: true,
            hand: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn seat(&self) -> SeatId {
        self.seat
    }

    /// The character this seat portrays.
    #[must_use]
    pub fn suspect(&self) -> Suspect {
        self.suspect
    }

    /// False once the seat has made a wrong accusation.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Add a card to the hand. Returns false if it was already held.
    pub fn give(&mut self, card: Card) -> bool {
        self.hand.insert(card)
    }

    #[must_use]
    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// The hand in a stable display order.
    #[must_use]
    pub fn hand(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.hand.iter().copied().collect();
        cards.sort_unstable();
        cards
    }

    /// First card of a suggestion this hand can show, checked in the order
    /// suspect, weapon, room.
    #[must_use]
    pub fn refuting_card(&self, suspect: Suspect, weapon: Weapon, room: Room) -> Option<Card> {
        [Card::Suspect(suspect), Card::Weapon(weapon), Card::Room(room)]
            .into_iter()
            .find(|c| self.has_card(*c))
    }

    pub(crate) fn eliminate(&mut self) {
        self.active = false;
    }
}
