//! Slot coordinates on the lattice.
//!
//! `y = 0` is the base row. `y > 0` addresses the top half, `y < 0` the
//! bottom half; `|y|` is the depth. At depth `d` the valid columns are
//! `0 <= x < N - d`, so each half narrows to a single apex slot at
//! `|y| = N - 1`.
//!
//! Coordinates are signed so that callers can pass anything they received
//! off the wire; out-of-range slots are answered, never rejected with a panic.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::cards::Side;

/// Address of a lattice slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub x: i32,
    pub y: i32,
}

impl Slot {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Distance from the base row.
    #[must_use]
    pub const fn depth(self) -> u32 {
        self.y.unsigned_abs()
    }

    /// Which half of the board the slot is on, `None` for the base row.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self.y {
            y if y > 0 => Some(Side::Top),
            y if y < 0 => Some(Side::Bottom),
            _ => None,
        }
    }

    /// The two slots one level closer to the base row that this slot merges.
    ///
    /// Returns `None` for base-row slots, which have no parents.
    #[must_use]
    pub const fn parents(self) -> Option<(Slot, Slot)> {
        let y = match self.y {
            y if y > 0 => y - 1,
            y if y < 0 => y + 1,
            _ => return None,
        };
        Some((Slot::new(self.x, y), Slot::new(self.x + 1, y)))
    }

    /// Map player-relative coordinates into canonical board coordinates.
    ///
    /// Player two looks at the board from the opposite edge, so their
    /// vertical axis is flipped.
    ///
    /// ```
    /// use logic_ccg::core::{Player, Slot};
    ///
    /// assert_eq!(Slot::from_view(Player::PlayerOne, 2, -1), Slot::new(2, -1));
    /// assert_eq!(Slot::from_view(Player::PlayerTwo, 2, -1), Slot::new(2, 1));
    /// ```
    #[must_use]
    pub const fn from_view(viewer: Player, x: i32, y: i32) -> Self {
        match viewer {
            Player::PlayerOne => Slot::new(x, y),
            Player::PlayerTwo => Slot::new(x, -y),
        }
    }

    /// Inverse of [`Slot::from_view`].
    #[must_use]
    pub const fn to_view(self, viewer: Player) -> (i32, i32) {
        match viewer {
            Player::PlayerOne => (self.x, self.y),
            Player::PlayerTwo => (self.x, -self.y),
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
