//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use rust_cluedo::board::{BoardGraph, SPAWNS};
use rust_cluedo::cards::{Card, Room, SolutionEnvelope, Suspect, Weapon};
use rust_cluedo::core::{GameConfig, GameRng, GameState, SeatId, TurnAction};
use rust_cluedo::players::PlayerRoster;
use rust_cluedo::rules::{ActionOutcome, TurnEngine, TurnInput, TurnView};
use rust_cluedo::zones::WeaponPlacement;

/// Install a test subscriber once. Set `RUST_LOG=debug` to see engine logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

pub const SOLUTION: (Suspect, Weapon, Room) = (Suspect::MrsPeacock, Weapon::Rope, Room::Study);

/// An engine with a known envelope and the given hands, seat 1 first.
pub fn rigged_engine(hands: &[&[Card]]) -> TurnEngine {
    let seats = hands.len();
    let mut roster = PlayerRoster::from_spawns(&SPAWNS[..seats]).unwrap();
    for (seat, hand) in SeatId::all(seats).zip(hands) {
        for card in *hand {
            roster.get_mut(seat).unwrap().give(*card);
        }
    }

    let mut weapons = WeaponPlacement::empty();
    weapons.place(Room::Kitchen, Weapon::Dagger);
    weapons.place(Room::Hall, Weapon::Candlestick);

    let state = GameState::from_parts(
        BoardGraph::standard(),
        roster,
        SolutionEnvelope::new(SOLUTION.0, SOLUTION.1, SOLUTION.2),
        weapons,
    )
    .unwrap();
    TurnEngine::from_state(state, GameRng::new(42), GameConfig::new(seats).with_seed(42))
}

pub fn correct_accusation() -> TurnAction {
    TurnAction::Accuse {
        suspect: SOLUTION.0,
        weapon: SOLUTION.1,
        room: SOLUTION.2,
    }
}

pub fn wrong_accusation() -> TurnAction {
    TurnAction::Accuse {
        suspect: Suspect::ColonelMustard,
        weapon: SOLUTION.1,
        room: SOLUTION.2,
    }
}

/// Replays a fixed list of choices and keeps everything it was shown.
#[derive(Default)]
pub struct ScriptedInput {
    script: VecDeque<TurnAction>,
    pub views: Vec<TurnView>,
    pub observed: Vec<(SeatId, ActionOutcome)>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = TurnAction>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl TurnInput for ScriptedInput {
    fn choose(&mut self, view: &TurnView) -> TurnAction {
        self.views.push(view.clone());
        self.script.pop_front().expect("script ran out of actions")
    }

    fn observe(&mut self, seat: SeatId, outcome: &ActionOutcome) {
        self.observed.push((seat, outcome.clone()));
    }
}
