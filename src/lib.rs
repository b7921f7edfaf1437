//! # logic-ccg
//!
//! Rules engine for a two-player logic-gate card game.
//!
//! Players build two pyramids of logic gates outward from a shared row of
//! base cards. Each gate merges the two values beneath it and must be tagged
//! with the output its family produces, so legality is pure boolean logic.
//!
//! ## Design Principles
//!
//! 1. **Authoritative**: The engine owns board, deck and turn. Callers only
//!    submit moves and read snapshots.
//!
//! 2. **Explicit outcomes**: Every mutator returns `Result<Accepted, Rejection>`.
//!    A rejected move never changes state.
//!
//! 3. **Deterministic**: A game is fully determined by its configuration,
//!    seed and the moves applied to it.
//!
//! ## Modules
//!
//! - `core`: Players, slots, actions, RNG, configuration
//! - `cards`: Card values, gate truth tables, side-dependent reading
//! - `board`: The lattice of base columns and their chains
//! - `deck`: Draw pile, hands and discards
//! - `rules`: Legality, turn control and the `LogicGame` engine
//! - `view`: Per-player (mirrored) snapshots

pub mod core;
pub mod cards;
pub mod board;
pub mod deck;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameRng, Player, PlayerMap, Slot,
};

pub use crate::cards::{Card, Gate, Side};

pub use crate::board::{Column, Lattice};

pub use crate::deck::DeckManager;

pub use crate::rules::{
    Accepted, GameBuilder, GateSet, LogicGame, MoveResult, Rejection, RulesEngine,
};

pub use crate::view::PlayerView;
