//! The turn state machine.
//!
//! ## Phases
//!
//! ```text
//! Rolling ──roll──▶ Acting ──budget hits 0──▶ Evaluating ──evaluate──▶ Rolling (next seat)
//!                                                       └────────────▶ Won / CaseCold
//! ```
//!
//! The engine can be driven one call at a time (`roll`, `apply`,
//! `evaluate`) or a whole turn at once through [`TurnEngine::play_turn`],
//! which asks a [`TurnInput`] for each choice.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::accusation::{AccusationOutcome, AccusationResolver};
use super::suggestion::{SuggestionOutcome, SuggestionResolver};
use crate::board::{BoardGraph, Coord};
use crate::cards::{Card, Room};
use crate::core::{ActionKind, GameConfig, GameError, GameRng, GameState, SeatId, TurnAction};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A seat made a correct accusation.
    Winner(SeatId),
    /// Every seat was eliminated; nobody solved it.
    CaseCold,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: SeatId) -> bool {
        matches!(self, GameResult::Winner(s) if *s == seat)
    }
}

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the die roll.
    Rolling,
    /// Choosing actions while budget remains.
    Acting,
    /// Budget spent; waiting to check for game end and pass the turn.
    Evaluating,
    /// Terminal: the seat solved the case.
    Won(SeatId),
    /// Terminal: no active seat remains.
    CaseCold,
}

impl TurnPhase {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TurnPhase::Rolling => "rolling",
            TurnPhase::Acting => "acting",
            TurnPhase::Evaluating => "evaluating",
            TurnPhase::Won(_) => "won",
            TurnPhase::CaseCold => "case cold",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::Won(_) | TurnPhase::CaseCold)
    }
}

/// What an applied action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The acting seat's hand, in display order.
    Hand(Vec<Card>),
    /// The seat stepped to `to`; `room` is set if that ended the turn.
    Moved { to: Coord, room: Option<Room> },
    Suggested(SuggestionOutcome),
    Accused(AccusationOutcome),
}

/// Snapshot handed to a [`TurnInput`] before each choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnView {
    pub seat: SeatId,
    pub remaining: u8,
    pub position: Option<Coord>,
    pub room: Option<Room>,
    pub legal_steps: Vec<Coord>,
    pub actions: Vec<ActionKind>,
    pub hand: Vec<Card>,
}

impl TurnView {
    #[must_use]
    pub fn offers(&self, kind: ActionKind) -> bool {
        self.actions.contains(&kind)
    }
}

/// Source of the acting seat's choices: a console menu, a script, a bot.
pub trait TurnInput {
    /// Pick the next action. Called once per iteration of the acting loop.
    fn choose(&mut self, view: &TurnView) -> TurnAction;

    /// Told what an accepted action did. Refutation cards are only ever
    /// passed here, to the seat that suggested.
    fn observe(&mut self, _seat: SeatId, _outcome: &ActionOutcome) {}
}

/// Owns the game state and advances it turn by turn.
pub struct TurnEngine {
    state: GameState,
    rng: GameRng,
    config: GameConfig,
    phase: TurnPhase,
    current: SeatId,
    remaining: u8,
}

impl TurnEngine {
    /// Build the board from `config.layout` and set up a game.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let board = BoardGraph::from_layout(&config.layout)?;
        let mut rng = GameRng::from_seed_option(config.seed);
        let state = GameState::setup(board, &config.vocabulary, config.player_count, &mut rng)?;
        info!(players = config.player_count, seeded = config.seed.is_some(), "engine ready");

        Ok(Self::from_state(state, rng, config))
    }

    /// Wrap an already set-up state; seat 1 rolls first.
    #[must_use]
    pub fn from_state(state: GameState, rng: GameRng, config: GameConfig) -> Self {
        Self {
            state,
            rng,
            config,
            phase: TurnPhase::Rolling,
            current: SeatId::new(1),
            remaining: 0,
        }
    }

    /// Start a new game with `player_count` seats on the same board and RNG.
    #[instrument(skip(self))]
    pub fn reset(&mut self, player_count: usize) -> Result<(), GameError> {
        let mut config = self.config.clone();
        config.player_count = player_count;
        config.validate()?;

        self.state
            .reset(&config.vocabulary, player_count, &mut self.rng)?;
        self.config = config;
        self.phase = TurnPhase::Rolling;
        self.current = SeatId::new(1);
        self.remaining = 0;
        info!("game reset");
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for setting up positions in tests and tools.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn current_seat(&self) -> SeatId {
        self.current
    }

    #[must_use]
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// True iff every seat has been eliminated.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.roster.all_eliminated()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            TurnPhase::Won(seat) => Some(GameResult::Winner(seat)),
            TurnPhase::CaseCold => Some(GameResult::CaseCold),
            _ => None,
        }
    }

    // === Turn Steps ===

    /// Roll the die for the current seat and start acting.
    pub fn roll(&mut self) -> Result<u8, GameError> {
        self.expect_phase(TurnPhase::Rolling, "roll")?;
        let roll = self.rng.roll_die();
        self.remaining = roll;
        self.phase = TurnPhase::Acting;
        debug!(seat = %self.current, roll, "rolled");
        Ok(roll)
    }

    /// Action kinds open to the current seat where it stands now.
    ///
    /// Empty outside the acting phase.
    #[must_use]
    pub fn available_actions(&self) -> Vec<ActionKind> {
        if self.phase != TurnPhase::Acting {
            return Vec::new();
        }
        let mut kinds = vec![ActionKind::ViewHand, ActionKind::Step];
        if self.state.board.is_in_room(self.current).is_some() {
            kinds.push(ActionKind::Suggest);
        }
        kinds.push(ActionKind::Accuse);
        kinds
    }

    /// Cells the current seat can step to.
    #[must_use]
    pub fn legal_steps(&self) -> Vec<Coord> {
        self.state.board.neighbours_of(self.current).to_vec()
    }

    #[must_use]
    pub fn view(&self) -> TurnView {
        let seat = self.current;
        TurnView {
            seat,
            remaining: self.remaining,
            position: self.state.board.position_of(seat),
            room: self.state.board.is_in_room(seat),
            legal_steps: self.legal_steps(),
            actions: self.available_actions(),
            hand: self
                .state
                .roster
                .get(seat)
                .map(|p| p.hand())
                .unwrap_or_default(),
        }
    }

    /// Apply one action for the current seat.
    ///
    /// Steps cost one unit of budget, and entering a room spends the rest.
    /// Accusing spends it all. Viewing the hand and suggesting are free.
    /// When the budget reaches zero the turn moves to evaluation.
    pub fn apply(&mut self, action: TurnAction) -> Result<ActionOutcome, GameError> {
        self.expect_phase(TurnPhase::Acting, "act")?;
        let seat = self.current;

        let outcome = match action {
            TurnAction::ViewHand => {
                let hand = self
                    .state
                    .roster
                    .get(seat)
                    .ok_or(GameError::UnknownSeat(seat))?
                    .hand();
                ActionOutcome::Hand(hand)
            }
            TurnAction::Step(to) => {
                let from = self
                    .state
                    .board
                    .position_of(seat)
                    .ok_or(GameError::UnknownSeat(seat))?;
                if !self.state.board.step_move(seat, to) {
                    return Err(GameError::IllegalStep { seat, from, to });
                }
                self.remaining = self.remaining.saturating_sub(1);
                let room = self.state.board.is_in_room(seat);
                if room.is_some() {
                    self.remaining = 0;
                }
                ActionOutcome::Moved { to, room }
            }
            TurnAction::Suggest { suspect, weapon } => {
                let room = self
                    .state
                    .board
                    .is_in_room(seat)
                    .ok_or(GameError::NotInRoom(seat))?;
                let outcome =
                    SuggestionResolver::resolve(&mut self.state, seat, suspect, weapon, room);
                ActionOutcome::Suggested(outcome)
            }
            TurnAction::Accuse {
                suspect,
                weapon,
                room,
            } => {
                let outcome =
                    AccusationResolver::resolve(&mut self.state, seat, suspect, weapon, room)?;
                self.remaining = 0;
                ActionOutcome::Accused(outcome)
            }
        };

        self.state.record_action(seat, action);
        if self.remaining == 0 {
            self.phase = TurnPhase::Evaluating;
        }
        Ok(outcome)
    }

    /// Close the turn: detect a win or a cold case, otherwise pass the
    /// turn to the next active seat. Returns the phase entered.
    pub fn evaluate(&mut self) -> Result<TurnPhase, GameError> {
        self.expect_phase(TurnPhase::Evaluating, "evaluate")?;

        if let Some(winner) = self.state.winner() {
            self.phase = TurnPhase::Won(winner);
            info!(%winner, turn = self.state.turn_number(), "game won");
        } else if self.is_game_over() {
            self.phase = TurnPhase::CaseCold;
            info!(turn = self.state.turn_number(), "every seat eliminated");
        } else {
            self.advance_seat();
        }
        Ok(self.phase)
    }

    /// Pass the turn to the next active seat, wrapping from the highest
    /// seat back to 1 and skipping eliminated seats. Only `evaluate` calls
    /// this, after it has ruled out a finished game.
    ///
    /// Returns `None` and leaves the seat unchanged if nobody is active.
    fn advance_seat(&mut self) -> Option<SeatId> {
        let next = self.state.roster.next_active_after(self.current)?;
        self.current = next;
        self.remaining = 0;
        self.state.advance_turn();
        if !self.phase.is_terminal() {
            self.phase = TurnPhase::Rolling;
        }
        debug!(seat = %next, turn = self.state.turn_number(), "next seat");
        Some(next)
    }

    /// Run one whole turn for the current seat, taking choices from
    /// `input`. Rejected choices are logged and asked for again.
    #[instrument(skip(self, input), fields(seat = %self.current))]
    pub fn play_turn(&mut self, input: &mut impl TurnInput) -> Result<TurnPhase, GameError> {
        if self.phase == TurnPhase::Rolling {
            self.roll()?;
        }

        while self.phase == TurnPhase::Acting {
            let view = self.view();
            let action = input.choose(&view);
            match self.apply(action) {
                Ok(outcome) => input.observe(view.seat, &outcome),
                Err(err @ (GameError::IllegalStep { .. } | GameError::NotInRoom(_))) => {
                    warn!(%err, "action rejected");
                }
                Err(err) => return Err(err),
            }
        }

        self.evaluate()
    }

    fn expect_phase(&self, wanted: TurnPhase, action: &'static str) -> Result<(), GameError> {
        if self.phase.is_terminal() {
            return Err(GameError::GameFinished);
        }
        // A decided game only accepts the evaluation that makes it terminal.
        if self.state.is_over() && wanted != TurnPhase::Evaluating {
            return Err(GameError::GameFinished);
        }
        if self.phase != wanted {
            return Err(GameError::WrongPhase {
                action,
                phase: self.phase.name(),
            });
        }
        Ok(())
    }
}
