//! Shared draw pile, the two hands, and the discard pile.
//!
//! The draw pile only ever holds gate cards. Cards are drawn from its tail
//! (the end of the vec). Whenever the pile runs dry it is refilled with a
//! fresh, shuffled full set, so a draw never fails.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::config::GameConfig;
use crate::core::player::{Player, PlayerMap};
use crate::core::rng::GameRng;

/// Owns every card that is not on the board.
///
/// ## Usage
///
/// ```
/// use logic_ccg::core::{GameConfig, GameRng, Player};
/// use logic_ccg::deck::DeckManager;
///
/// let mut rng = GameRng::new(42);
/// let deck = DeckManager::deal(&GameConfig::default(), &mut rng);
///
/// assert_eq!(deck.hand(Player::PlayerOne).len(), 5);
/// assert_eq!(deck.hand(Player::PlayerTwo).len(), 5);
/// assert_eq!(deck.pile().len(), 48 - 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckManager {
    /// Draw pile; the tail is the next card drawn.
    pile: Vec<Card>,

    hands: PlayerMap<Vec<Card>>,

    /// Cards thrown away by discards, oldest first.
    discards: Vec<Card>,

    /// Number of full sets added to the pile so far.
    refills: u32,

    copies_per_gate: usize,
    hand_size: usize,
}

impl DeckManager {
    /// Create a manager with an empty pile and empty hands.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pile: Vec::with_capacity(config.set_size()),
            hands: PlayerMap::new(|_| Vec::with_capacity(config.hand_size)),
            discards: Vec::new(),
            refills: 0,
            copies_per_gate: config.copies_per_gate,
            hand_size: config.hand_size,
        }
    }

    /// Create a manager with a shuffled pile and both hands topped up.
    #[must_use]
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut deck = Self::new(config);
        deck.refill_draw_pile(rng);
        for player in Player::ALL {
            deck.top_up(player, rng);
        }
        deck
    }

    /// Add a full set of gate cards to the pile and shuffle it.
    pub fn refill_draw_pile(&mut self, rng: &mut GameRng) {
        for card in Card::GATES {
            self.pile
                .extend(std::iter::repeat(card).take(self.copies_per_gate));
        }
        rng.shuffle(&mut self.pile);
        self.refills += 1;

        debug!(refills = self.refills, pile = self.pile.len(), "draw pile refilled");
    }

    /// Move the tail card of the pile into `player`'s hand.
    ///
    /// Refills the pile first if it is empty, and again if this draw
    /// emptied it.
    pub fn draw_into(&mut self, player: Player, rng: &mut GameRng) -> Card {
        if self.pile.is_empty() {
            self.refill_draw_pile(rng);
        }

        // A refill always adds at least one card per gate variant.
        let card = self.pile.pop().unwrap_or(Card::Empty);
        debug_assert!(card.is_gate());
        self.hands[player].push(card);

        if self.pile.is_empty() {
            self.refill_draw_pile(rng);
        }
        card
    }

    /// Draw until `player` holds exactly the configured hand size.
    pub fn top_up(&mut self, player: Player, rng: &mut GameRng) {
        while self.hands[player].len() < self.hand_size {
            self.draw_into(player, rng);
        }
    }

    /// Refill the pile if it is empty. Returns true if a refill happened.
    pub fn ensure_stocked(&mut self, rng: &mut GameRng) -> bool {
        if self.pile.is_empty() {
            self.refill_draw_pile(rng);
            true
        } else {
            false
        }
    }

    /// A player's hand, in draw order.
    #[must_use]
    pub fn hand(&self, player: Player) -> &[Card] {
        &self.hands[player]
    }

    /// Index of the first copy of `card` in `player`'s hand.
    #[must_use]
    pub fn position(&self, player: Player, card: Card) -> Option<usize> {
        self.hands[player].iter().position(|&c| c == card)
    }

    /// Remove and return the card at `index` of `player`'s hand.
    pub fn take(&mut self, player: Player, index: usize) -> Option<Card> {
        let hand = &mut self.hands[player];
        (index < hand.len()).then(|| hand.remove(index))
    }

    /// Move the card at `index` of `player`'s hand to the discard pile.
    pub fn discard(&mut self, player: Player, index: usize) -> Option<Card> {
        let card = self.take(player, index)?;
        self.discards.push(card);
        Some(card)
    }

    /// The draw pile; the last card is drawn next.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Cards thrown away so far, oldest first.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Number of full sets added to the pile so far.
    #[must_use]
    pub fn refills(&self) -> u32 {
        self.refills
    }

    /// Configured hand size.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// Count of each card across pile, hands and discards.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        let held = self.hands.iter().flat_map(|(_, hand)| hand.iter());
        for &card in self.pile.iter().chain(held).chain(self.discards.iter()) {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
impl DeckManager {
    /// Swap hand card `index` with the first pile card matching `wanted`.
    pub(crate) fn swap_from_pile(
        &mut self,
        player: Player,
        index: usize,
        wanted: impl Fn(Card) -> bool,
    ) -> bool {
        let Some(pile_index) = self.pile.iter().position(|&c| wanted(c)) else {
            return false;
        };
        std::mem::swap(&mut self.hands[player][index], &mut self.pile[pile_index]);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GameConfig {
        GameConfig {
            copies_per_gate: 1,
            hand_size: 4,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_refill_adds_full_set() {
        let mut rng = GameRng::new(42);
        let mut deck = DeckManager::new(&GameConfig::default());

        deck.refill_draw_pile(&mut rng);

        assert_eq!(deck.pile().len(), 48);
        assert_eq!(deck.refills(), 1);
        assert!(deck.pile().iter().all(|c| c.is_gate()));
        for card in Card::GATES {
            assert_eq!(deck.pile().iter().filter(|&&c| c == card).count(), 8);
        }
    }

    #[test]
    fn test_refill_shuffles() {
        let mut rng = GameRng::new(42);
        let mut deck = DeckManager::new(&GameConfig::default());

        deck.refill_draw_pile(&mut rng);

        let mut sorted = deck.pile().to_vec();
        sorted.sort();
        assert_ne!(deck.pile(), sorted.as_slice());
    }

    #[test]
    fn test_draw_takes_tail() {
        let mut rng = GameRng::new(42);
        let mut deck = DeckManager::new(&GameConfig::default());
        deck.refill_draw_pile(&mut rng);

        let expected = *deck.pile().last().unwrap();
        let drawn = deck.draw_into(Player::PlayerOne, &mut rng);

        assert_eq!(drawn, expected);
        assert_eq!(deck.hand(Player::PlayerOne), &[expected]);
        assert_eq!(deck.pile().len(), 47);
    }

    #[test]
    fn test_draw_from_empty_pile_refills_first() {
        let mut rng = GameRng::new(42);
        let mut deck = DeckManager::new(&GameConfig::default());

        let drawn = deck.draw_into(Player::PlayerTwo, &mut rng);

        assert!(drawn.is_gate());
        assert_eq!(deck.refills(), 1);
        assert_eq!(deck.pile().len(), 47);
    }

    #[test]
    fn test_draw_that_empties_pile_refills_after() {
        let mut rng = GameRng::new(42);
        let mut deck = DeckManager::new(&small_config());
        deck.refill_draw_pile(&mut rng);

        for _ in 0..6 {
            deck.draw_into(Player::PlayerOne, &mut rng);
            assert!(!deck.pile().is_empty());
        }

        assert_eq!(deck.refills(), 2);
        assert_eq!(deck.pile().len(), 6);
    }

    #[test]
    fn test_deal_tops_up_both_hands() {
        let mut rng = GameRng::new(3);
        let deck = DeckManager::deal(&small_config(), &mut rng);

        assert_eq!(deck.hand(Player::PlayerOne).len(), 4);
        assert_eq!(deck.hand(Player::PlayerTwo).len(), 4);
        // 6 cards per set, 8 drawn: one refill mid-deal
        assert_eq!(deck.refills(), 2);
        assert_eq!(deck.pile().len(), 4);
    }

    #[test]
    fn test_take_and_discard() {
        let mut rng = GameRng::new(42);
        let mut deck = DeckManager::deal(&GameConfig::default(), &mut rng);
        let hand = deck.hand(Player::PlayerOne).to_vec();

        assert_eq!(deck.take(Player::PlayerOne, 7), None);
        assert_eq!(deck.discard(Player::PlayerOne, 5), None);
        assert_eq!(deck.hand(Player::PlayerOne), hand.as_slice());

        assert_eq!(deck.discard(Player::PlayerOne, 1), Some(hand[1]));
        assert_eq!(deck.discards(), &[hand[1]]);
        assert_eq!(deck.hand(Player::PlayerOne).len(), 4);

        deck.top_up(Player::PlayerOne, &mut rng);
        assert_eq!(deck.hand(Player::PlayerOne).len(), 5);
    }

    #[test]
    fn test_position() {
        let mut rng = GameRng::new(42);
        let deck = DeckManager::deal(&GameConfig::default(), &mut rng);
        let first = deck.hand(Player::PlayerTwo)[0];

        assert_eq!(deck.position(Player::PlayerTwo, first), Some(0));
        assert_eq!(deck.position(Player::PlayerTwo, Card::StateLow), None);
    }

    #[test]
    fn test_census_conserves_cards() {
        let mut rng = GameRng::new(11);
        let mut deck = DeckManager::deal(&small_config(), &mut rng);

        for _ in 0..20 {
            deck.discard(Player::PlayerOne, 0);
            deck.top_up(Player::PlayerOne, &mut rng);
        }

        let census = deck.census();
        let total: usize = census.values().sum();
        assert_eq!(total, deck.refills() as usize * 6);
        for card in Card::GATES {
            assert_eq!(census[&card], deck.refills() as usize);
        }
    }

    #[test]
    fn test_ensure_stocked() {
        let mut rng = GameRng::new(42);
        let mut deck = DeckManager::new(&GameConfig::default());

        assert!(deck.ensure_stocked(&mut rng));
        assert!(!deck.ensure_stocked(&mut rng));
        assert_eq!(deck.refills(), 1);
    }
}
