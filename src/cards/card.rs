//! Card values.
//!
//! A `Card` is either a state card (only ever found on the base row), a gate
//! card tagged with the output polarity it was placed with, or the `Empty`
//! sentinel that board queries return for unfilled or off-board slots.

use serde::{Deserialize, Serialize};

/// The half of the board a slot belongs to, i.e. the direction from which
/// a base card is being read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }
}

/// Gate family of a gate card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    And,
    Or,
    Xor,
}

impl Gate {
    pub const ALL: [Gate; 3] = [Gate::And, Gate::Or, Gate::Xor];

    /// Output of the gate for the two merged inputs.
    #[must_use]
    pub const fn eval(self, left: bool, right: bool) -> bool {
        match self {
            Gate::And => left && right,
            Gate::Or => left || right,
            Gate::Xor => left ^ right,
        }
    }
}

/// A card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    /// Base card: reads `true` from the top, `false` from the bottom.
    StateLow,
    /// Base card: reads `false` from the top, `true` from the bottom.
    StateHigh,
    AndFalse,
    AndTrue,
    OrFalse,
    OrTrue,
    XorFalse,
    XorTrue,
    /// Nothing there (unfilled or off the board). Never stored.
    Empty,
}

impl Card {
    /// Every gate card, in a fixed order.
    pub const GATES: [Card; 6] = [
        Card::AndFalse,
        Card::AndTrue,
        Card::OrFalse,
        Card::OrTrue,
        Card::XorFalse,
        Card::XorTrue,
    ];

    /// Build the gate card for a family and output polarity.
    #[must_use]
    pub const fn gate(gate: Gate, polarity: bool) -> Self {
        match (gate, polarity) {
            (Gate::And, false) => Card::AndFalse,
            (Gate::And, true) => Card::AndTrue,
            (Gate::Or, false) => Card::OrFalse,
            (Gate::Or, true) => Card::OrTrue,
            (Gate::Xor, false) => Card::XorFalse,
            (Gate::Xor, true) => Card::XorTrue,
        }
    }

    #[must_use]
    pub const fn is_state(self) -> bool {
        matches!(self, Card::StateLow | Card::StateHigh)
    }

    #[must_use]
    pub const fn is_gate(self) -> bool {
        self.gate_family().is_some()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Card::Empty)
    }

    /// Gate family, `None` for state cards and `Empty`.
    #[must_use]
    pub const fn gate_family(self) -> Option<Gate> {
        match self {
            Card::AndFalse | Card::AndTrue => Some(Gate::And),
            Card::OrFalse | Card::OrTrue => Some(Gate::Or),
            Card::XorFalse | Card::XorTrue => Some(Gate::Xor),
            _ => None,
        }
    }

    /// Output polarity of a gate card, `None` for anything else.
    #[must_use]
    pub const fn polarity(self) -> Option<bool> {
        match self {
            Card::AndTrue | Card::OrTrue | Card::XorTrue => Some(true),
            Card::AndFalse | Card::OrFalse | Card::XorFalse => Some(false),
            _ => None,
        }
    }

    /// Boolean value this card feeds into a slot on `side`.
    ///
    /// Gate cards always read as their polarity. State cards depend on the
    /// side they are seen from. `Empty` has no value.
    #[must_use]
    pub const fn read(self, side: Side) -> Option<bool> {
        match (self, side) {
            (Card::StateLow, Side::Top) | (Card::StateHigh, Side::Bottom) => Some(true),
            (Card::StateLow, Side::Bottom) | (Card::StateHigh, Side::Top) => Some(false),
            _ => self.polarity(),
        }
    }

    /// The card as seen from the opposite edge of the table.
    ///
    /// State cards swap orientation; gate cards and `Empty` are unchanged.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Card::StateLow => Card::StateHigh,
            Card::StateHigh => Card::StateLow,
            other => other,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Card::StateLow => "STATE 0/1",
            Card::StateHigh => "STATE 1/0",
            Card::AndFalse => "AND 0",
            Card::AndTrue => "AND 1",
            Card::OrFalse => "OR 0",
            Card::OrTrue => "OR 1",
            Card::XorFalse => "XOR 0",
            Card::XorTrue => "XOR 1",
            Card::Empty => "EMPTY",
        };
        f.write_str(name)
    }
}
