//! Game state: the single aggregate every resolver works on.
//!
//! ## GameState
//!
//! Owns, for one game:
//! - the board (token positions)
//! - the weapon placement
//! - the roster (hands and active flags)
//! - the sealed envelope
//! - the winner, once there is one
//! - the action history
//!
//! Nothing outside the engine's call chain mutates it between turns.

use im::Vector;
use tracing::info;

use super::action::{ActionRecord, TurnAction};
use super::error::GameError;
use super::player::SeatId;
use super::rng::GameRng;
use crate::board::{BoardGraph, Spawn};
use crate::cards::{Card, Room, SolutionEnvelope, Suspect, Vocabulary, Weapon};
use crate::players::PlayerRoster;
use crate::zones::WeaponPlacement;

/// Full game state including private information.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Token positions and topology.
    pub board: BoardGraph,

    /// Which room holds which weapon.
    pub weapons: WeaponPlacement,

    /// Seats, hands and active flags.
    pub roster: PlayerRoster,

    /// Only ever compared against.
    envelope: SolutionEnvelope,

    winner: Option<SeatId>,

    /// Action history; `im::Vector` so snapshots of the state clone cheaply.
    history: Vector<ActionRecord>,

    /// Turn number (starts at 1).
    turn_number: u32,

    /// Action sequence within the current turn.
    action_sequence: u32,
}

impl GameState {
    /// Set up a fresh game on `board`.
    ///
    /// Clears the board, puts seats `1..=player_count` on their spawn cells,
    /// seals a random envelope, scatters the weapons and deals the remaining
    /// cards round-robin from seat 1.
    pub fn setup(
        mut board: BoardGraph,
        vocabulary: &Vocabulary,
        player_count: usize,
        rng: &mut GameRng,
    ) -> Result<Self, GameError> {
        let (roster, envelope, weapons) = Self::deal(&mut board, vocabulary, player_count, rng)?;
        Ok(Self::assemble(board, roster, envelope, weapons))
    }

    /// Start a new game in place, keeping the board topology.
    pub fn reset(
        &mut self,
        vocabulary: &Vocabulary,
        player_count: usize,
        rng: &mut GameRng,
    ) -> Result<(), GameError> {
        let (roster, envelope, weapons) =
            Self::deal(&mut self.board, vocabulary, player_count, rng)?;
        self.roster = roster;
        self.envelope = envelope;
        self.weapons = weapons;
        self.winner = None;
        self.history = Vector::new();
        self.turn_number = 1;
        self.action_sequence = 0;
        Ok(())
    }

    /// Build a state from known parts, placing every roster seat on its
    /// spawn cell. Hands are taken from the roster as given.
    pub fn from_parts(
        mut board: BoardGraph,
        roster: PlayerRoster,
        envelope: SolutionEnvelope,
        weapons: WeaponPlacement,
    ) -> Result<Self, GameError> {
        board.clear_occupancy();
        for player in roster.iter() {
            let spawn = board.spawn(player.seat())?;
            board.place(player.seat(), spawn.coord)?;
        }
        Ok(Self::assemble(board, roster, envelope, weapons))
    }

    fn assemble(
        board: BoardGraph,
        roster: PlayerRoster,
        envelope: SolutionEnvelope,
        weapons: WeaponPlacement,
    ) -> Self {
        Self {
            board,
            weapons,
            roster,
            envelope,
            winner: None,
            history: Vector::new(),
            turn_number: 1,
            action_sequence: 0,
        }
    }

    fn deal(
        board: &mut BoardGraph,
        vocabulary: &Vocabulary,
        player_count: usize,
        rng: &mut GameRng,
    ) -> Result<(PlayerRoster, SolutionEnvelope, WeaponPlacement), GameError> {
        let max = board.spawn_count().min(super::player::MAX_SEATS);
        if player_count == 0 || player_count > max {
            return Err(GameError::InvalidPlayerCount {
                got: player_count,
                max,
            });
        }

        let spawns = SeatId::all(player_count)
            .map(|seat| board.spawn(seat))
            .collect::<Result<Vec<Spawn>, _>>()?;
        let mut roster = PlayerRoster::from_spawns(&spawns)?;

        board.clear_occupancy();
        for (seat, spawn) in SeatId::all(player_count).zip(&spawns) {
            board.place(seat, spawn.coord)?;
        }

        let envelope = SolutionEnvelope::draw(vocabulary, rng).ok_or(GameError::EmptyVocabulary)?;
        let weapons = WeaponPlacement::scatter(vocabulary, rng);

        let mut deck: Vec<Card> = Card::deck(vocabulary)
            .into_iter()
            .filter(|card| !envelope.contains(*card))
            .collect();
        rng.shuffle(&mut deck);
        roster.deal(deck);

        info!(players = player_count, "game set up");
        Ok((roster, envelope, weapons))
    }

    // === Queries ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.seat_count()
    }

    /// Exact comparison against the sealed envelope.
    #[must_use]
    pub fn envelope_matches(&self, suspect: Suspect, weapon: Weapon, room: Room) -> bool {
        self.envelope.matches(suspect, weapon, room)
    }

    /// Whether `card` was withheld from the deal.
    #[must_use]
    pub fn is_sealed(&self, card: Card) -> bool {
        self.envelope.contains(card)
    }

    #[must_use]
    pub fn winner(&self) -> Option<SeatId> {
        self.winner
    }

    pub(crate) fn set_winner(&mut self, seat: SeatId) {
        self.winner = Some(seat);
    }

    /// True once a seat has won or every seat has been eliminated.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.roster.all_eliminated()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    // === Action History ===

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Append `action` by `seat` to the history under the current turn.
    pub fn record_action(&mut self, seat: SeatId, action: TurnAction) {
        let record = ActionRecord::new(seat, action, self.turn_number, self.action_sequence);
        self.action_sequence += 1;
        self.history.push_back(record);
    }

    /// Move on to the next turn number.
    pub fn advance_turn(&mut self) {
        self.turn_number += 1;
        self.action_sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SPAWNS;
    use rustc_hash::FxHashSet;

    fn fresh(player_count: usize, seed: u64) -> GameState {
        let mut rng = GameRng::new(seed);
        GameState::setup(
            BoardGraph::standard(),
            &Vocabulary::STANDARD,
            player_count,
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn test_setup_places_seats_on_spawns() {
        let state = fresh(6, 1);

        for (seat, spawn) in SeatId::all(6).zip(SPAWNS.iter()) {
            assert_eq!(state.board.position_of(seat), Some(spawn.coord));
            assert_eq!(state.roster.get(seat).unwrap().suspect(), spawn.suspect);
        }
    }

    #[test]
    fn test_setup_deals_every_card_outside_envelope_once() {
        let state = fresh(4, 2);

        let mut seen = FxHashSet::default();
        for player in state.roster.iter() {
            for card in player.hand() {
                assert!(!state.is_sealed(card));
                assert!(seen.insert(card), "{card} dealt twice");
            }
        }
        assert_eq!(seen.len(), Vocabulary::STANDARD.card_count() - 3);
    }

    #[test]
    fn test_setup_scatters_all_weapons() {
        let state = fresh(3, 3);
        assert_eq!(state.weapons.iter().count(), 6);
        assert!(state.weapons.is_injective());
    }

    #[test]
    fn test_setup_rejects_bad_counts() {
        let mut rng = GameRng::new(0);
        let err = GameState::setup(BoardGraph::standard(), &Vocabulary::STANDARD, 7, &mut rng);
        assert!(matches!(err, Err(GameError::InvalidPlayerCount { got: 7, .. })));
    }

    #[test]
    fn test_history_sequence_resets_per_turn() {
        let mut state = fresh(2, 4);
        state.record_action(SeatId::new(1), TurnAction::ViewHand);
        state.record_action(SeatId::new(1), TurnAction::ViewHand);
        state.advance_turn();
        state.record_action(SeatId::new(2), TurnAction::ViewHand);

        let seq: Vec<_> = state.history().iter().map(|r| (r.turn, r.sequence)).collect();
        assert_eq!(seq, vec![(1, 0), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_reset_clears_winner_and_history() {
        let mut state = fresh(3, 5);
        let mut rng = GameRng::new(6);
        state.set_winner(SeatId::new(2));
        state.record_action(SeatId::new(2), TurnAction::ViewHand);

        state.reset(&Vocabulary::STANDARD, 2, &mut rng).unwrap();

        assert_eq!(state.winner(), None);
        assert!(state.history().is_empty());
        assert_eq!(state.player_count(), 2);
        assert_eq!(state.board.position_of(SeatId::new(3)), None);
    }
}
