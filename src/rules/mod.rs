//! Game rules: placement legality, the turn controller and the engine.
//!
//! - `legality`: Which gates may go where, and why a placement fails
//! - `engine`: `LogicGame`, its builder, and the `RulesEngine` trait
//! - `outcome`: `Accepted` / `Rejection` results of mutating calls

pub mod engine;
pub mod legality;
pub mod outcome;

pub use engine::{GameBuilder, LogicGame, RulesEngine};
pub use legality::{can_accept, legal_gates, GateSet};
pub use outcome::{Accepted, MoveResult, Rejection};
