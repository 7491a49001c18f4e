//! Build state: one optional part per slot.

use crate::catalog::Part;
use crate::money::{Currency, Money};
use crate::slot::SlotKind;
use serde::{Deserialize, Serialize};

/// One optional part per slot, in canonical order.
///
/// The value type exchanged with the persistence adapter; `BuildState`
/// hands out copies and accepts one wholesale on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotSelections {
    parts: [Option<Part>; 8],
}

impl SlotSelections {
    /// Empty selections.
    pub fn new() -> Self {
        Self::default()
    }

    /// The part selected for a slot, if any.
    pub fn get(&self, slot: SlotKind) -> Option<&Part> {
        self.parts[slot.index()].as_ref()
    }

    /// Set or clear a slot, returning the prior selection.
    pub fn set(&mut self, slot: SlotKind, part: Option<Part>) -> Option<Part> {
        std::mem::replace(&mut self.parts[slot.index()], part)
    }

    /// Selected parts with their slots, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotKind, &Part)> {
        SlotKind::ALL
            .iter()
            .filter_map(|&slot| self.get(slot).map(|part| (slot, part)))
    }

    /// Number of filled slots.
    pub fn filled_count(&self) -> usize {
        self.parts.iter().filter(|p| p.is_some()).count()
    }

    /// Check if no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|p| p.is_none())
    }
}

/// The live configuration for one session.
///
/// Exactly one writer: the owning session. Mutated only through
/// `select`, `clear` and `replace_all`; the total is always derived,
/// never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildState {
    slots: SlotSelections,
}

impl BuildState {
    /// Create an empty build.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a part for a slot, replacing any prior selection.
    ///
    /// Other slots are left untouched: selecting a new CPU does not
    /// re-validate or clear an already-chosen motherboard or RAM.
    /// Passing a part of the wrong kind is a caller bug.
    pub fn select(&mut self, slot: SlotKind, part: Part) -> Option<Part> {
        debug_assert_eq!(part.slot, slot, "part kind must match the target slot");
        tracing::debug!(slot = %slot, part = %part.id, "select part");
        self.slots.set(slot, Some(part))
    }

    /// Clear a slot, returning the removed part.
    ///
    /// Dependent slots are not cascade-cleared: clearing the CPU leaves
    /// a previously chosen motherboard in place.
    pub fn clear(&mut self, slot: SlotKind) -> Option<Part> {
        tracing::debug!(slot = %slot, "clear slot");
        self.slots.set(slot, None)
    }

    /// The part selected for a slot, if any.
    pub fn get(&self, slot: SlotKind) -> Option<&Part> {
        self.slots.get(slot)
    }

    /// Check if no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of filled slots.
    pub fn selected_count(&self) -> usize {
        self.slots.filled_count()
    }

    /// Selected parts with their slots, in canonical order.
    pub fn selections(&self) -> impl Iterator<Item = (SlotKind, &Part)> {
        self.slots.iter()
    }

    /// A copy of the current selections, e.g., for the persistence
    /// adapter. The adapter never mutates the live state.
    pub fn snapshot(&self) -> SlotSelections {
        self.slots.clone()
    }

    /// Replace every slot at once, e.g., when loading a saved build.
    pub fn replace_all(&mut self, slots: SlotSelections) {
        tracing::debug!(filled = slots.filled_count(), "replace all slots");
        self.slots = slots;
    }

    /// The running total: sum of selected parts' prices.
    ///
    /// Recomputed on every call; a part with no usable price
    /// contributes zero (its price deserialized as zero). Saturates
    /// instead of overflowing.
    pub fn total(&self) -> Money {
        let currency = self
            .slots
            .iter()
            .next()
            .map(|(_, part)| part.price.currency)
            .unwrap_or_else(Currency::default);
        Money::saturating_sum(self.slots.iter().map(|(_, part)| &part.price), currency)
    }
}
