//! Core engine types: players, slots, actions, RNG, configuration.

pub mod player;
pub mod slot;
pub mod rng;
pub mod config;
pub mod action;

pub use player::{Player, PlayerMap};
pub use slot::Slot;
pub use rng::GameRng;
pub use config::{ConfigError, GameConfig, GATE_VARIANTS};
pub use action::{Action, ActionRecord};
