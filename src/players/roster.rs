//! The table of seats, in fixed order.
//!
//! Seats are created once per game and never renumbered. Activity only
//! goes from true to false; a reset builds a fresh roster.

use tracing::debug;

use super::player::Player;
use crate::board::Spawn;
use crate::cards::{Card, Suspect};
use crate::core::{GameError, SeatId, SeatMap, MAX_SEATS};

/// Seats `1..=N` with their players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRoster {
    players: SeatMap<Player>,
}

impl PlayerRoster {
    /// Seat `spawns.len()` players, seat `n` portraying `spawns[n - 1].suspect`.
    pub fn from_spawns(spawns: &[Spawn]) -> Result<Self, GameError> {
        if spawns.is_empty() || spawns.len() > MAX_SEATS {
            return Err(GameError::InvalidPlayerCount {
                got: spawns.len(),
                max: MAX_SEATS,
            });
        }
        let players = SeatMap::new(spawns.len(), |seat| {
            Player::new(seat, spawns[seat.index()].suspect)
        });
        Ok(Self { players })
    }

    /// Seat players with explicit identities, seat 1 first.
    pub fn from_suspects(suspects: &[Suspect]) -> Result<Self, GameError> {
        if suspects.is_empty() || suspects.len() > MAX_SEATS {
            return Err(GameError::InvalidPlayerCount {
                got: suspects.len(),
                max: MAX_SEATS,
            });
        }
        let players = SeatMap::new(suspects.len(), |seat| Player::new(seat, suspects[seat.index()]));
        Ok(Self { players })
    }

    /// Deal `cards` round-robin starting at seat 1.
    pub fn deal(&mut self, cards: impl IntoIterator<Item = Card>) {
        let seats = self.seat_count();
        let mut seat = SeatId::new(1);
        for card in cards {
            self.players[seat].give(card);
            seat = seat.next(seats);
        }
        debug!(
            hands = ?self.players.iter().map(|(_, p)| p.hand_size()).collect::<Vec<_>>(),
            "dealt"
        );
    }

    /// Number of seats, active or not.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.players.seat_count()
    }

    #[must_use]
    pub fn get(&self, seat: SeatId) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn get_mut(&mut self, seat: SeatId) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    /// All players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().map(|(_, p)| p)
    }

    /// The seat portraying `suspect`, if that character is at the table.
    #[must_use]
    pub fn seat_of(&self, suspect: Suspect) -> Option<SeatId> {
        self.iter().find(|p| p.suspect() == suspect).map(Player::seat)
    }

    #[must_use]
    pub fn is_active(&self, seat: SeatId) -> bool {
        self.get(seat).is_some_and(Player::is_active)
    }

    /// Permanently clear a seat's active flag.
    pub fn eliminate(&mut self, seat: SeatId) -> Result<(), GameError> {
        let player = self.get_mut(seat).ok_or(GameError::UnknownSeat(seat))?;
        player.eliminate();
        Ok(())
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.iter().filter(|p| p.is_active()).count()
    }

    /// True iff every seat has been eliminated.
    #[must_use]
    pub fn all_eliminated(&self) -> bool {
        self.active_count() == 0
    }

    /// Every other seat in forward order starting just after `seat`,
    /// wrapping past the last seat, active or not.
    pub fn seats_after(&self, seat: SeatId) -> impl Iterator<Item = SeatId> {
        let count = self.seat_count();
        std::iter::successors(Some(seat.next(count)), move |s| Some(s.next(count)))
            .take(count.saturating_sub(1))
    }

    /// The next active seat after `seat`, wrapping. May return `seat`
    /// itself if it is the only active one; `None` if nobody is active.
    #[must_use]
    pub fn next_active_after(&self, seat: SeatId) -> Option<SeatId> {
        let count = self.seat_count();
        std::iter::successors(Some(seat.next(count)), move |s| Some(s.next(count)))
            .take(count)
            .find(|s| self.is_active(*s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SPAWNS;
    use crate::cards::Vocabulary;

    fn roster(n: usize) -> PlayerRoster {
        PlayerRoster::from_spawns(&SPAWNS[..n]).unwrap()
    }

    #[test]
    fn test_from_spawns_assigns_suspects_in_seat_order() {
        let r = roster(6);
        assert_eq!(r.seat_count(), 6);
        assert_eq!(r.get(SeatId::new(1)).unwrap().suspect(), Suspect::MissScarlett);
        assert_eq!(r.get(SeatId::new(6)).unwrap().suspect(), Suspect::ProfessorPlum);
    }

    #[test]
    fn test_invalid_counts() {
        assert!(PlayerRoster::from_spawns(&[]).is_err());
        assert!(PlayerRoster::from_suspects(&[Suspect::MrsWhite; 7]).is_err());
    }

    #[test]
    fn test_deal_round_robin() {
        let mut r = roster(4);
        r.deal(Card::deck(&Vocabulary::STANDARD).into_iter().take(18));

        let sizes: Vec<_> = r.iter().map(Player::hand_size).collect();
        assert_eq!(sizes, vec![5, 5, 4, 4]);
        assert!(r
            .get(SeatId::new(1))
            .unwrap()
            .has_card(Card::Suspect(Suspect::MissScarlett)));
        assert!(r
            .get(SeatId::new(2))
            .unwrap()
            .has_card(Card::Suspect(Suspect::ColonelMustard)));
        assert!(r
            .get(SeatId::new(1))
            .unwrap()
            .has_card(Card::Suspect(Suspect::MrsPeacock)));
    }

    #[test]
    fn test_seats_after_wraps() {
        let r = roster(4);
        let order: Vec<_> = r.seats_after(SeatId::new(2)).map(|s| s.0).collect();
        assert_eq!(order, vec![3, 4, 1]);

        let single = roster(1);
        assert_eq!(single.seats_after(SeatId::new(1)).count(), 0);
    }

    #[test]
    fn test_next_active_skips_eliminated() {
        let mut r = roster(4);
        r.eliminate(SeatId::new(2)).unwrap();
        r.eliminate(SeatId::new(3)).unwrap();

        assert_eq!(r.next_active_after(SeatId::new(1)), Some(SeatId::new(4)));
        assert_eq!(r.next_active_after(SeatId::new(4)), Some(SeatId::new(1)));
    }

    #[test]
    fn test_all_eliminated() {
        let mut r = roster(3);
        for seat in SeatId::all(3) {
            assert!(!r.all_eliminated());
            r.eliminate(seat).unwrap();
        }
        assert!(r.all_eliminated());
        assert_eq!(r.next_active_after(SeatId::new(1)), None);
    }

    #[test]
    fn test_seat_of_and_unknown_seat() {
        let mut r = roster(3);
        assert_eq!(r.seat_of(Suspect::MrsWhite), Some(SeatId::new(3)));
        assert_eq!(r.seat_of(Suspect::ProfessorPlum), None);
        assert_eq!(
            r.eliminate(SeatId::new(9)),
            Err(GameError::UnknownSeat(SeatId::new(9)))
        );
    }
}
