//! Move outcomes.
//!
//! Every mutator returns `Result<Accepted, Rejection>`. A rejected move
//! leaves hands, pile, board and turn exactly as they were.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;
use crate::core::player::Player;
use crate::core::slot::Slot;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("it is not {0}'s turn")]
    NotYourTurn(Player),
    #[error("{0} is not a gate card")]
    NotAGate(Card),
    #[error("slot {0} is not a placeable board position")]
    OffBoard(Slot),
    #[error("{player} may not place on slot {slot}")]
    WrongSide { player: Player, slot: Slot },
    #[error("slot {0} is not the next free link of its chain")]
    SlotNotOpen(Slot),
    #[error("slot {0} cannot be filled before both slots beneath it")]
    ParentsIncomplete(Slot),
    #[error("{gate} is not legal on slot {slot}")]
    IllegalGate { slot: Slot, gate: Card },
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("hand index {index} is out of range for a hand of {len}")]
    HandIndexOutOfRange { index: usize, len: usize },
}

/// A move that went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accepted {
    /// Sequence number the move was recorded under.
    pub sequence: u32,

    /// The player who moves next.
    pub next_player: Player,
}

/// Result of a mutating call.
pub type MoveResult = Result<Accepted, Rejection>;
