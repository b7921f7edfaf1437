//! Deck management: the shared draw pile, both hands and discards.
//!
//! Hands are replenished one-for-one from the tail of the draw pile; an
//! empty pile is refilled with a freshly shuffled full set.

pub mod manager;

pub use manager::DeckManager;
