//! Per-player views of a game.
//!
//! The second player's view is mirrored so both players see their own half
//! of the board from the same physical direction.

pub mod snapshot;

pub use snapshot::PlayerView;
