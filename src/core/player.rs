//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The game is strictly two-seat: `PlayerOne` and `PlayerTwo`. The seat is
//! also the turn token, so the active player is just a `Player` value.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// Both seats, in seating order.
    pub const ALL: [Player; 2] = [Player::PlayerOne, Player::PlayerTwo];

    /// Seat index (0 for player one, 1 for player two).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::PlayerOne => 0,
            Player::PlayerTwo => 1,
        }
    }

    /// Seat for a raw index. Any index other than 0 or 1 yields `None`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::PlayerOne),
            1 => Some(Player::PlayerTwo),
            _ => None,
        }
    }

    /// The other seat.
    ///
    /// ```
    /// use logic_ccg::core::Player;
    ///
    /// assert_eq!(Player::PlayerOne.opponent(), Player::PlayerTwo);
    /// assert_eq!(Player::PlayerTwo.opponent(), Player::PlayerOne);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::PlayerOne => write!(f, "Player One"),
            Player::PlayerTwo => write!(f, "Player Two"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use logic_ccg::core::{Player, PlayerMap};
///
/// let mut hands: PlayerMap<Vec<u8>> = PlayerMap::with_default();
/// hands[Player::PlayerTwo].push(3);
///
/// assert!(hands[Player::PlayerOne].is_empty());
/// assert_eq!(hands[Player::PlayerTwo], vec![3]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::PlayerOne), factory(Player::PlayerTwo)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Player, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Player, &mut T)> {
        Player::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
