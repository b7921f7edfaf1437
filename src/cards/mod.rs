//! Card values: state cards, gate cards and the empty sentinel.
//!
//! ## Key Types
//!
//! - `Card`: Every card value that can appear on the board or in a hand
//! - `Gate`: Gate family (AND/OR/XOR) with its truth table
//! - `Side`: Direction a slot is approached from (top or bottom half)

pub mod card;

pub use card::{Card, Gate, Side};
