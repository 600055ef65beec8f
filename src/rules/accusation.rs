//! Accusation resolution.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{Room, Suspect, Weapon};
use crate::core::{GameError, GameState, SeatId};

/// How an accusation turned out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccusationOutcome {
    /// All three matched the envelope; the accuser has won.
    Correct,
    /// The accuser is eliminated but keeps their hand.
    Incorrect,
}

/// Compares an accusation against the envelope and applies the result.
///
/// A correct accusation records the accuser as winner. A wrong one clears
/// the accuser's active flag for good; the seat still refutes suggestions
/// and can still be named in them.
pub struct AccusationResolver;

impl AccusationResolver {
    pub fn resolve(
        state: &mut GameState,
        accuser: SeatId,
        suspect: Suspect,
        weapon: Weapon,
        room: Room,
    ) -> Result<AccusationOutcome, GameError> {
        state
            .roster
            .get(accuser)
            .ok_or(GameError::UnknownSeat(accuser))?;

        if state.envelope_matches(suspect, weapon, room) {
            state.set_winner(accuser);
            info!(%accuser, %suspect, %weapon, %room, "case solved");
            Ok(AccusationOutcome::Correct)
        } else {
            state.roster.eliminate(accuser)?;
            info!(%accuser, "wrong accusation, seat eliminated");
            Ok(AccusationOutcome::Incorrect)
        }
    }
}
