//! Action representation.
//!
//! Two moves exist: placing a gate card from hand onto a lattice slot, or
//! discarding a card from hand. Both consume the mover's turn.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::slot::Slot;
use crate::cards::Card;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use logic_ccg::cards::Card;
/// use logic_ccg::core::{Action, Slot};
///
/// let place = Action::Place { slot: Slot::new(0, 1), gate: Card::OrTrue };
/// let discard = Action::Discard { hand_index: 3 };
///
/// assert!(place.is_place());
/// assert!(!discard.is_place());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put `gate` from the mover's hand on `slot`.
    Place { slot: Slot, gate: Card },
    /// Throw away the card at `hand_index`.
    Discard { hand_index: usize },
}

impl Action {
    #[must_use]
    pub fn is_place(&self) -> bool {
        matches!(self, Action::Place { .. })
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Position of the action in the game (0-based, accepted moves only).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: Player, action: Action, sequence: u32) -> Self {
        Self {
            player,
            action,
            sequence,
        }
    }
}
