//! What each player is shown.
//!
//! Player one sees the canonical board. Player two sits at the opposite
//! edge, so their board is mirrored: chains swap halves, state cards flip
//! orientation, and their vertical axis points the other way. Gate cards are
//! shown as placed.

use serde::{Deserialize, Serialize};

use crate::board::Lattice;
use crate::cards::Card;
use crate::core::player::Player;
use crate::core::slot::Slot;
use crate::rules::LogicGame;

/// Snapshot of the game from one seat, ready to be pushed to that player.
///
/// ```
/// use logic_ccg::core::Player;
/// use logic_ccg::rules::LogicGame;
/// use logic_ccg::view::PlayerView;
///
/// let game = LogicGame::new(42);
/// let one = PlayerView::new(&game, Player::PlayerOne);
/// let two = PlayerView::new(&game, Player::PlayerTwo);
///
/// assert_ne!(one.can_place, two.can_place);
/// assert_eq!(two.board, game.lattice().mirrored());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Seat this view was rendered for.
    pub viewer: Player,

    /// Board in the viewer's orientation.
    pub board: Lattice,

    /// Viewer's own hand.
    pub hand: Vec<Card>,

    /// Whether it is the viewer's turn.
    pub can_place: bool,
}

impl PlayerView {
    #[must_use]
    pub fn new(game: &LogicGame, viewer: Player) -> Self {
        let board = match viewer {
            Player::PlayerOne => game.lattice().clone(),
            Player::PlayerTwo => game.lattice().mirrored(),
        };

        Self {
            viewer,
            board,
            hand: game.hand(viewer).to_vec(),
            can_place: game.active_player() == viewer,
        }
    }

    /// Card at viewer-relative coordinates.
    #[must_use]
    pub fn card_at(&self, x: i32, y: i32) -> Card {
        self.board.get(Slot::new(x, y))
    }

    /// Canonical slot for viewer-relative coordinates, for passing a move
    /// back to the engine.
    #[must_use]
    pub fn to_canonical(&self, x: i32, y: i32) -> Slot {
        Slot::from_view(self.viewer, x, y)
    }
}

impl LogicGame {
    /// Render the game for `viewer`.
    #[must_use]
    pub fn view(&self, viewer: Player) -> PlayerView {
        PlayerView::new(self, viewer)
    }
}
