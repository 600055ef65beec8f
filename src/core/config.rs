//! Game configuration.
//!
//! A table is configured at startup by providing:
//! - how many seats are playing
//! - an optional RNG seed (reproducible games for tests and replays)
//! - the card vocabulary to deal from
//! - the board layout
//!
//! Nothing here is read from globals; the engine takes a `GameConfig` by
//! value and keeps what it needs.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::MAX_SEATS;
use crate::board::BoardLayout;
use crate::cards::Vocabulary;

/// Complete game configuration.
///
/// ```
/// use rust_cluedo::core::GameConfig;
///
/// let config = GameConfig::new(4).with_seed(42);
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new(7).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (1..=6).
    pub player_count: usize,

    /// Seed for the game RNG; `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Cards to deal from.
    #[serde(skip)]
    pub vocabulary: Vocabulary,

    /// Board topology.
    #[serde(default)]
    pub layout: BoardLayout,
}

impl GameConfig {
    /// Standard vocabulary and board for `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            seed: None,
            vocabulary: Vocabulary::STANDARD,
            layout: BoardLayout::standard(),
        }
    }

    /// Seed the RNG.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Deal from a different vocabulary.
    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Play on a different board.
    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Check the seat count against the spawn table.
    pub fn validate(&self) -> Result<(), GameError> {
        let max = MAX_SEATS.min(self.layout.spawns.len());
        if self.player_count == 0 || self.player_count > max {
            return Err(GameError::InvalidPlayerCount {
                got: self.player_count,
                max,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(3)
    }
}
