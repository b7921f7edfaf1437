//! Game configuration.
//!
//! The board width, hand size and deck composition are fixed for the
//! lifetime of a game. Defaults match the standard table: six base columns,
//! five-card hands and eight copies of each gate card.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of distinct gate cards (three gate families times two polarities).
pub const GATE_VARIANTS: usize = 6;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board needs at least 2 base columns, got {0}")]
    TooFewColumns(usize),
    #[error("board supports at most {max} base columns, got {got}", max = GameConfig::MAX_COLUMNS)]
    TooManyColumns { got: usize },
    #[error("hand size must be at least 1")]
    EmptyHand,
    #[error("deck needs at least one copy of each gate card")]
    EmptyDeck,
    #[error("expected {expected} base cards, got {got}")]
    BaseCountMismatch { expected: usize, got: usize },
    #[error("base column {0} does not hold a state card")]
    NotAStateCard(usize),
}

/// Static parameters of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of base columns (N).
    pub columns: usize,

    /// Cards each hand is topped up to.
    pub hand_size: usize,

    /// Copies of each gate card in one full draw pile.
    pub copies_per_gate: usize,

    /// Restrict player one to the bottom half and player two to the top half.
    pub enforce_sides: bool,
}

impl GameConfig {
    /// Upper bound on columns; keeps slot coordinates well inside `i32`.
    pub const MAX_COLUMNS: usize = 64;

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < 2 {
            return Err(ConfigError::TooFewColumns(self.columns));
        }
        if self.columns > Self::MAX_COLUMNS {
            return Err(ConfigError::TooManyColumns { got: self.columns });
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        if self.copies_per_gate == 0 {
            return Err(ConfigError::EmptyDeck);
        }
        Ok(())
    }

    /// Size of one freshly filled draw pile.
    #[must_use]
    pub fn set_size(&self) -> usize {
        GATE_VARIANTS * self.copies_per_gate
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: 6,
            hand_size: 5,
            copies_per_gate: 8,
            enforce_sides: false,
        }
    }
}
