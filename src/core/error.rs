//! Crate error type.
//!
//! Board primitives report plain booleans; everything that can be refused
//! at the engine or configuration boundary comes back as a [`GameError`].

use super::player::SeatId;
use crate::board::Coord;

/// Errors surfaced by configuration, layout construction and the turn engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("player count must be between 1 and {max}, got {got}")]
    InvalidPlayerCount { got: usize, max: usize },

    #[error("malformed cell descriptor '{0}', expected KIND.CODE")]
    MalformedDescriptor(String),

    #[error("unknown cell kind tag '{0}'")]
    UnknownKindTag(String),

    #[error("unknown room code '{0}'")]
    UnknownRoomCode(String),

    #[error("layout declares {rows}x{cols} but supplies {cells} cells")]
    LayoutShape { rows: usize, cols: usize, cells: usize },

    #[error("layout coordinate {0} is outside the board")]
    CoordOutOfBounds(Coord),

    #[error("cannot seal an envelope from a vocabulary with an empty list")]
    EmptyVocabulary,

    #[error("no spawn point for seat {0}")]
    MissingSpawn(SeatId),

    #[error("unknown seat {0}")]
    UnknownSeat(SeatId),

    #[error("cannot {action} during the {phase} phase")]
    WrongPhase { action: &'static str, phase: &'static str },

    #[error("the game is over; reset to play again")]
    GameFinished,

    #[error("{seat} cannot step from {from} to {to}")]
    IllegalStep { seat: SeatId, from: Coord, to: Coord },

    #[error("{0} must be inside a room to make a suggestion")]
    NotInRoom(SeatId),

    #[error("unknown {kind} name '{name}'")]
    UnknownName { kind: &'static str, name: String },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
