//! Placement legality and value propagation.
//!
//! A slot merges the two slots one level closer to the base row. It can be
//! filled once it is the next link of its chain and neither of those two
//! slots is still waiting for a card. The gate placed there must carry the
//! output its family produces for the two incoming values, so each family
//! has exactly one legal polarity.
//!
//! The two apex slots are further restricted by the base card on the far
//! edge: the top apex must match column 0 read from the top, the bottom
//! apex must match the last column read from the bottom.

use smallvec::SmallVec;

use crate::board::Lattice;
use crate::cards::{Card, Gate, Side};
use crate::core::slot::Slot;

use super::outcome::Rejection;

/// Up to one gate card per gate family.
pub type GateSet = SmallVec<[Card; 3]>;

/// Whether either slot feeding `slot` is itself still the next open link.
#[must_use]
pub fn parents_pending(lattice: &Lattice, slot: Slot) -> bool {
    slot.parents()
        .is_some_and(|(left, right)| lattice.is_open_slot(left) || lattice.is_open_slot(right))
}

/// Whether `slot` is open and not blocked by an unfilled level beneath it.
#[must_use]
pub fn can_accept(lattice: &Lattice, slot: Slot) -> bool {
    lattice.is_open_slot(slot) && !parents_pending(lattice, slot)
}

/// The two boolean inputs flowing into `slot`, if both parents resolve.
#[must_use]
pub fn inputs(lattice: &Lattice, slot: Slot) -> Option<(bool, bool)> {
    let side = slot.side()?;
    let (left, right) = slot.parents()?;
    Some((lattice.get(left).read(side)?, lattice.get(right).read(side)?))
}

/// One gate card per family, each tagged with its output for the inputs.
#[must_use]
pub fn candidates(left: bool, right: bool) -> GateSet {
    Gate::ALL
        .into_iter()
        .map(|gate| Card::gate(gate, gate.eval(left, right)))
        .collect()
}

/// Polarity an apex slot is restricted to, `None` for every other slot.
#[must_use]
pub fn apex_requirement(lattice: &Lattice, slot: Slot) -> Option<bool> {
    let side = slot.side()?;
    if slot != lattice.apex(side) {
        return None;
    }
    let edge = match side {
        Side::Top => 0,
        Side::Bottom => lattice.width() - 1,
    };
    lattice.base(edge)?.read(side)
}

/// Gate cards that may be placed on `slot` right now.
///
/// Empty if the slot cannot accept a card or its inputs do not resolve.
#[must_use]
pub fn legal_gates(lattice: &Lattice, slot: Slot) -> GateSet {
    if !can_accept(lattice, slot) {
        return GateSet::new();
    }
    let Some((left, right)) = inputs(lattice, slot) else {
        return GateSet::new();
    };

    let mut gates = candidates(left, right);
    if let Some(required) = apex_requirement(lattice, slot) {
        gates.retain(|gate| gate.polarity() == Some(required));
    }
    gates
}

/// Check that `gate` may be placed on `slot`, naming the first rule broken.
pub fn check_placement(lattice: &Lattice, slot: Slot, gate: Card) -> Result<(), Rejection> {
    if !gate.is_gate() {
        return Err(Rejection::NotAGate(gate));
    }
    if !lattice.contains(slot) || slot.side().is_none() {
        return Err(Rejection::OffBoard(slot));
    }
    if !lattice.is_open_slot(slot) {
        return Err(Rejection::SlotNotOpen(slot));
    }
    if parents_pending(lattice, slot) || inputs(lattice, slot).is_none() {
        return Err(Rejection::ParentsIncomplete(slot));
    }
    if !legal_gates(lattice, slot).contains(&gate) {
        return Err(Rejection::IllegalGate { slot, gate });
    }
    Ok(())
}
