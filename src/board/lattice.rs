//! The pyramid of base columns and their two growing chains.
//!
//! Each base column owns a chain growing toward the top and one growing
//! toward the bottom. The slot `(x, y)` with `y != 0` is link `|y|` of the
//! chain rooted at column `x + |y|`, on the half given by the sign of `y`.
//! Chains are append-only, so a link at depth `d` exists only if every
//! shallower link does.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Side};
use crate::core::rng::GameRng;
use crate::core::slot::Slot;

/// One base column: its state card and both chains, root first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    pub base: Card,
    pub top: Vec<Card>,
    pub bottom: Vec<Card>,
}

impl Column {
    #[must_use]
    pub fn new(base: Card) -> Self {
        Self {
            base,
            top: Vec::new(),
            bottom: Vec::new(),
        }
    }

    /// The chain growing toward `side`.
    #[must_use]
    pub fn chain(&self, side: Side) -> &[Card] {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }

    fn chain_mut(&mut self, side: Side) -> &mut Vec<Card> {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
        }
    }
}

/// The board.
///
/// ## Usage
///
/// ```
/// use logic_ccg::board::Lattice;
/// use logic_ccg::cards::Card;
/// use logic_ccg::core::Slot;
///
/// let lattice = Lattice::new(vec![Card::StateLow, Card::StateHigh, Card::StateLow]);
///
/// assert_eq!(lattice.get(Slot::new(1, 0)), Card::StateHigh);
/// assert!(lattice.is_open_slot(Slot::new(0, 1)));
/// assert!(!lattice.is_open_slot(Slot::new(0, 2)));
/// assert_eq!(lattice.get(Slot::new(0, 1)), Card::Empty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lattice {
    columns: Vec<Column>,
}

impl Lattice {
    /// Create an empty board over the given base cards.
    ///
    /// Panics if fewer than two bases are given or any base is not a state
    /// card; `GameBuilder` validates both before calling this.
    #[must_use]
    pub fn new(bases: Vec<Card>) -> Self {
        assert!(bases.len() >= 2, "Board needs at least 2 base columns");
        assert!(
            bases.iter().all(|b| b.is_state()),
            "Base columns must hold state cards"
        );

        Self {
            columns: bases.into_iter().map(Column::new).collect(),
        }
    }

    /// Create an empty board with `columns` randomly oriented base cards.
    #[must_use]
    pub fn random(columns: usize, rng: &mut GameRng) -> Self {
        let bases = (0..columns)
            .map(|_| {
                if rng.gen_bool(0.5) {
                    Card::StateLow
                } else {
                    Card::StateHigh
                }
            })
            .collect();
        Self::new(bases)
    }

    /// Number of base columns (N).
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Depth of the apex slots (`N - 1`).
    #[must_use]
    pub fn apex_depth(&self) -> u32 {
        self.columns.len() as u32 - 1
    }

    /// All columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Base card of column `x`, if it exists.
    #[must_use]
    pub fn base(&self, x: usize) -> Option<Card> {
        self.columns.get(x).map(|c| c.base)
    }

    /// Whether `slot` lies inside the triangle (`0 <= x < N - |y|`).
    #[must_use]
    pub fn contains(&self, slot: Slot) -> bool {
        let n = self.columns.len() as i64;
        let depth = i64::from(slot.depth());
        let x = i64::from(slot.x);
        x >= 0 && depth < n && x < n - depth
    }

    /// Column index, side and depth of a non-base slot inside the triangle.
    fn locate(&self, slot: Slot) -> Option<(usize, Side, usize)> {
        if !self.contains(slot) {
            return None;
        }
        let side = slot.side()?;
        let depth = slot.depth() as usize;
        Some((slot.x as usize + depth, side, depth))
    }

    /// Card at `slot`: the base card on row 0, the chain link otherwise,
    /// `Empty` off the board or past the end of a chain.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Card {
        if !self.contains(slot) {
            return Card::Empty;
        }
        match self.locate(slot) {
            None => self.columns[slot.x as usize].base,
            Some((column, side, depth)) => self.columns[column]
                .chain(side)
                .get(depth - 1)
                .copied()
                .unwrap_or(Card::Empty),
        }
    }

    /// Whether `slot` is exactly the next link of its chain.
    #[must_use]
    pub fn is_open_slot(&self, slot: Slot) -> bool {
        self.locate(slot)
            .is_some_and(|(column, side, depth)| self.columns[column].chain(side).len() == depth - 1)
    }

    /// Append `gate` to the chain `slot` belongs to.
    ///
    /// Performs no rule checks; callers establish `is_open_slot` and gate
    /// legality first. Off-board and base-row slots are ignored.
    pub(crate) fn append(&mut self, slot: Slot, gate: Card) {
        if let Some((column, side, depth)) = self.locate(slot) {
            let chain = self.columns[column].chain_mut(side);
            debug_assert_eq!(chain.len(), depth - 1, "append to non-open slot {slot}");
            chain.push(gate);
        }
    }

    /// Number of gate cards on the board.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.top.len() + c.bottom.len())
            .sum()
    }

    /// All placed gate cards, top chains then bottom chains, column by column.
    pub fn placed_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.columns
            .iter()
            .flat_map(|c| c.top.iter().chain(c.bottom.iter()).copied())
    }

    /// The single apex slot of a half.
    #[must_use]
    pub fn apex(&self, side: Side) -> Slot {
        let depth = self.apex_depth() as i32;
        match side {
            Side::Top => Slot::new(0, depth),
            Side::Bottom => Slot::new(0, -depth),
        }
    }

    /// Whether the apex of a half has been filled.
    #[must_use]
    pub fn apex_filled(&self, side: Side) -> bool {
        self.get(self.apex(side)).is_gate()
    }

    /// The board as seen from the opposite edge of the table.
    ///
    /// Chains swap halves and base cards flip orientation, so
    /// `mirrored().get((x, y))` is `get((x, -y))` with state cards mirrored.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    base: c.base.mirrored(),
                    top: c.bottom.clone(),
                    bottom: c.top.clone(),
                })
                .collect(),
        }
    }

    /// Every slot inside the triangle, base row included, row by row from
    /// the top apex down to the bottom apex.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        let depth = self.apex_depth() as i32;
        let n = self.columns.len() as i32;
        (-depth..=depth)
            .rev()
            .flat_map(move |y| (0..n - y.abs()).map(move |x| Slot::new(x, y)))
    }
}
