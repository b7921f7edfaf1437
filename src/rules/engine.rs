//! The game engine: board, deck and turn token behind one mutating API.
//!
//! Every mutator checks turn ownership first, validates the whole move, and
//! only then commits. The active player flips exactly once per accepted
//! move; a rejected move changes nothing.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::board::Lattice;
use crate::cards::{Card, Side};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::{ConfigError, GameConfig};
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::core::slot::Slot;
use crate::deck::DeckManager;

use super::legality::{self, GateSet};
use super::outcome::{Accepted, MoveResult, Rejection};

/// Rules engine trait.
///
/// Exposes move enumeration and dispatch so callers (session layers,
/// bots, replay tools) can drive a game without knowing its internals.
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// The player whose move it is.
    fn active_player(&self) -> Player;

    /// Every placement `player` could make right now.
    ///
    /// Empty if it is not `player`'s turn.
    fn legal_placements(&self, player: Player) -> Vec<Action>;

    /// Every discard `player` could make right now.
    ///
    /// Empty if it is not `player`'s turn.
    fn legal_discards(&self, player: Player) -> Vec<Action>;

    /// Apply an action on behalf of `player`.
    fn apply_action(&mut self, player: Player, action: &Action) -> MoveResult;

    // === Convenience Methods ===

    /// Enumerate all legal actions for a player, placements first.
    fn legal_actions(&self, player: Player) -> Vec<Action> {
        let mut actions = self.legal_placements(player);
        actions.extend(self.legal_discards(player));
        actions
    }
}

/// Builder for creating a `LogicGame`.
///
/// ```
/// use logic_ccg::cards::Card;
/// use logic_ccg::core::Player;
/// use logic_ccg::rules::GameBuilder;
///
/// let game = GameBuilder::new()
///     .bases(vec![Card::StateLow, Card::StateHigh, Card::StateLow])
///     .first_player(Player::PlayerTwo)
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.lattice().width(), 3);
/// assert_eq!(game.active_player(), Player::PlayerTwo);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    bases: Option<Vec<Card>>,
    first_player: Option<Player>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.config.columns = columns;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    pub fn copies_per_gate(mut self, copies: usize) -> Self {
        self.config.copies_per_gate = copies;
        self
    }

    pub fn enforce_sides(mut self, enforce: bool) -> Self {
        self.config.enforce_sides = enforce;
        self
    }

    /// Fix the base cards instead of drawing random orientations.
    ///
    /// Also sets the column count to `bases.len()`.
    pub fn bases(mut self, bases: Vec<Card>) -> Self {
        self.config.columns = bases.len();
        self.bases = Some(bases);
        self
    }

    /// Fix the starting player instead of flipping a coin.
    pub fn first_player(mut self, player: Player) -> Self {
        self.first_player = Some(player);
        self
    }

    /// Validate the configuration and set up the game.
    pub fn build(self, seed: u64) -> Result<LogicGame, ConfigError> {
        self.config.validate()?;
        if let Some(bases) = &self.bases {
            if bases.len() != self.config.columns {
                return Err(ConfigError::BaseCountMismatch {
                    expected: self.config.columns,
                    got: bases.len(),
                });
            }
            if let Some(column) = bases.iter().position(|b| !b.is_state()) {
                return Err(ConfigError::NotAStateCard(column));
            }
        }
        Ok(LogicGame::setup(self.config, self.bases, self.first_player, seed))
    }

    /// Build with a seed drawn from the operating system.
    pub fn build_from_entropy(self) -> Result<LogicGame, ConfigError> {
        self.build(GameRng::from_entropy().seed())
    }
}

/// One game in progress.
#[derive(Clone, Debug)]
pub struct LogicGame {
    config: GameConfig,
    lattice: Lattice,
    deck: DeckManager,
    active: Player,
    /// Stream used for every deck shuffle.
    rng: GameRng,
    seed: u64,
    history: Vector<ActionRecord>,
}

impl LogicGame {
    /// Create a standard game (six columns, five-card hands).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::setup(GameConfig::default(), None, None, seed)
    }

    /// Start building a customised game.
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// Set up a game from an already validated configuration.
    fn setup(
        config: GameConfig,
        bases: Option<Vec<Card>>,
        first_player: Option<Player>,
        seed: u64,
    ) -> Self {
        let root = GameRng::new(seed);
        let mut board_rng = root.for_context("board");
        let mut rng = root.for_context("deck");

        // Always consume the coin so overrides don't shift the base draws
        let coin = board_rng.gen_bool(0.5);
        let active = first_player.unwrap_or(if coin {
            Player::PlayerOne
        } else {
            Player::PlayerTwo
        });

        let lattice = match bases {
            Some(bases) => Lattice::new(bases),
            None => Lattice::random(config.columns, &mut board_rng),
        };
        let deck = DeckManager::deal(&config, &mut rng);

        info!(seed, columns = config.columns, first = %active, "game created");

        Self {
            config,
            lattice,
            deck,
            active,
            rng,
            seed,
            history: Vector::new(),
        }
    }

    // === Read-only accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The player whose move it is.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Seed the game was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    #[must_use]
    pub fn deck(&self) -> &DeckManager {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self, player: Player) -> &[Card] {
        self.deck.hand(player)
    }

    /// Accepted moves so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn get(&self, slot: Slot) -> Card {
        self.lattice.get(slot)
    }

    #[must_use]
    pub fn is_open_slot(&self, slot: Slot) -> bool {
        self.lattice.is_open_slot(slot)
    }

    #[must_use]
    pub fn can_accept(&self, slot: Slot) -> bool {
        legality::can_accept(&self.lattice, slot)
    }

    /// Gates that may go on `slot` right now, regardless of whose hand
    /// holds them. Intended for move hints.
    #[must_use]
    pub fn legal_gates(&self, slot: Slot) -> GateSet {
        legality::legal_gates(&self.lattice, slot)
    }

    #[must_use]
    pub fn apex_filled(&self, side: Side) -> bool {
        self.lattice.apex_filled(side)
    }

    /// Count of each gate card across pile, hands, discards and board.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Card, usize> {
        let mut counts = self.deck.census();
        for card in self.lattice.placed_cards() {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    // === Mutators ===

    /// Place `gate` from `player`'s hand on `slot`.
    ///
    /// On success the turn passes, the card moves from hand to board and
    /// the hand is topped back up.
    pub fn place(&mut self, slot: Slot, gate: Card, player: Player) -> MoveResult {
        let result = self.try_place(slot, gate, player);
        if let Err(reason) = &result {
            debug!(%player, %slot, %gate, %reason, "placement rejected");
        }
        result
    }

    /// Place the card at `hand_index` of `player`'s hand on `slot`.
    pub fn place_from_hand(&mut self, hand_index: usize, slot: Slot, player: Player) -> MoveResult {
        let gate = self.ensure_turn(player).and_then(|()| self.card_in_hand(player, hand_index));
        match gate {
            Ok(gate) => self.place(slot, gate, player),
            Err(reason) => {
                debug!(%player, hand_index, %slot, %reason, "placement rejected");
                Err(reason)
            }
        }
    }

    /// Throw away the card at `hand_index` of `player`'s hand.
    pub fn discard(&mut self, hand_index: usize, player: Player) -> MoveResult {
        let result = self.try_discard(hand_index, player);
        if let Err(reason) = &result {
            debug!(%player, hand_index, %reason, "discard rejected");
        }
        result
    }

    fn try_place(&mut self, slot: Slot, gate: Card, player: Player) -> MoveResult {
        self.ensure_turn(player)?;
        if !gate.is_gate() {
            return Err(Rejection::NotAGate(gate));
        }
        self.ensure_side(player, slot)?;
        legality::check_placement(&self.lattice, slot, gate)?;
        let index = self
            .deck
            .position(player, gate)
            .ok_or(Rejection::CardNotInHand(gate))?;

        self.active = player.opponent();
        self.deck.take(player, index);
        self.lattice.append(slot, gate);
        self.deck.top_up(player, &mut self.rng);

        Ok(self.record(player, Action::Place { slot, gate }))
    }

    fn try_discard(&mut self, hand_index: usize, player: Player) -> MoveResult {
        self.ensure_turn(player)?;
        self.card_in_hand(player, hand_index)?;

        self.active = player.opponent();
        self.deck.discard(player, hand_index);
        self.deck.top_up(player, &mut self.rng);
        self.deck.ensure_stocked(&mut self.rng);

        Ok(self.record(player, Action::Discard { hand_index }))
    }

    fn ensure_turn(&self, player: Player) -> Result<(), Rejection> {
        if player == self.active {
            Ok(())
        } else {
            Err(Rejection::NotYourTurn(player))
        }
    }

    /// With side enforcement on, player one builds downward and player two
    /// upward.
    fn ensure_side(&self, player: Player, slot: Slot) -> Result<(), Rejection> {
        let wrong = match (player, slot.side()) {
            (Player::PlayerOne, Some(Side::Top)) => true,
            (Player::PlayerTwo, Some(Side::Bottom)) => true,
            _ => false,
        };
        if self.config.enforce_sides && wrong {
            Err(Rejection::WrongSide { player, slot })
        } else {
            Ok(())
        }
    }

    fn card_in_hand(&self, player: Player, hand_index: usize) -> Result<Card, Rejection> {
        let hand = self.deck.hand(player);
        hand.get(hand_index)
            .copied()
            .ok_or(Rejection::HandIndexOutOfRange {
                index: hand_index,
                len: hand.len(),
            })
    }

    fn record(&mut self, player: Player, action: Action) -> Accepted {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player, action, sequence));

        debug!(%player, ?action, sequence, next = %self.active, "move accepted");

        Accepted {
            sequence,
            next_player: self.active,
        }
    }
}

#[cfg(test)]
impl LogicGame {
    /// Put `gate` into `player`'s hand (swapping with the pile) so a test
    /// does not depend on the shuffle.
    pub(crate) fn stack_hand(&mut self, player: Player, gate: Card) {
        if self.deck.position(player, gate).is_none() {
            assert!(self.deck.swap_from_pile(player, 0, |c| c == gate));
        }
    }
}

impl RulesEngine for LogicGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_placements(&self, player: Player) -> Vec<Action> {
        if player != self.active {
            return vec![];
        }

        let hand = self.deck.hand(player);
        let mut actions = Vec::new();

        for slot in self.lattice.slots() {
            if self.ensure_side(player, slot).is_err() {
                continue;
            }
            for gate in self.legal_gates(slot) {
                if hand.contains(&gate) {
                    actions.push(Action::Place { slot, gate });
                }
            }
        }

        actions
    }

    fn legal_discards(&self, player: Player) -> Vec<Action> {
        if player != self.active {
            return vec![];
        }

        (0..self.deck.hand(player).len())
            .map(|hand_index| Action::Discard { hand_index })
            .collect()
    }

    fn apply_action(&mut self, player: Player, action: &Action) -> MoveResult {
        match *action {
            Action::Place { slot, gate } => self.place(slot, gate, player),
            Action::Discard { hand_index } => self.discard(hand_index, player),
        }
    }
}
