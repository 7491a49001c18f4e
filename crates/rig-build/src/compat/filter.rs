//! Candidate filtering.
//!
//! Derives the eligible parts for a slot from a catalog snapshot and
//! the current build. Pure: no caching, no mutation, stable catalog
//! order. Callers re-invoke after any catalog refresh.

use crate::build::BuildState;
use crate::catalog::Part;
use crate::compat::rules;
use crate::slot::SlotKind;

/// Whether a slot is locked because its prerequisite is empty.
///
/// A locked slot offers no candidates; the UI disables selection for
/// it. Distinct from a slot whose filtered candidate list happens to be
/// empty.
pub fn is_locked(slot: SlotKind, state: &BuildState) -> bool {
    slot.prerequisite()
        .is_some_and(|prereq| state.get(prereq).is_none())
}

/// The catalog parts currently eligible for a slot.
///
/// Restricts the snapshot to parts of the slot's kind, then applies the
/// compatibility rule linked to that slot. Returns an empty list for a
/// locked slot.
pub fn candidates(slot: SlotKind, catalog: &[Part], state: &BuildState) -> Vec<Part> {
    if is_locked(slot, state) {
        return Vec::new();
    }

    let of_kind = catalog.iter().filter(|part| part.slot == slot);

    match slot {
        SlotKind::Motherboard => {
            // Not locked, so a CPU is selected.
            match state.get(SlotKind::Cpu) {
                Some(cpu) => of_kind
                    .filter(|board| rules::motherboard_matches_cpu(cpu, board))
                    .cloned()
                    .collect(),
                None => Vec::new(),
            }
        }
        SlotKind::Ram => match state.get(SlotKind::Motherboard) {
            Some(board) => of_kind
                .filter(|ram| rules::ram_matches_board(board, ram))
                .cloned()
                .collect(),
            None => Vec::new(),
        },
        SlotKind::Cooling => match rules::active_socket(state) {
            Some(socket) => of_kind
                .filter(|cooler| rules::cooler_fits_socket(socket, cooler))
                .cloned()
                .collect(),
            // No socket known yet: offer every cooler.
            None => of_kind.cloned().collect(),
        },
        _ => of_kind.cloned().collect(),
    }
}
