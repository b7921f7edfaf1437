//! Board lattice: base columns and their top/bottom chains.
//!
//! ## Key Types
//!
//! - `Lattice`: Slot addressing, occupancy queries and chain growth
//! - `Column`: One base card with its two chains

pub mod lattice;

pub use lattice::{Column, Lattice};
