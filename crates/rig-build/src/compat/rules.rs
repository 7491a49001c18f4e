//! Cross-slot compatibility rules.
//!
//! Stateless predicates over catalog parts and the current build.
//! Attribute comparisons are case-insensitive and whitespace-tolerant.
//! An absent attribute matches nothing, with one exception: a cooler
//! whose socket is the `Universal` sentinel fits every socket.

use crate::build::BuildState;
use crate::catalog::part::attr_eq;
use crate::catalog::{Part, UNIVERSAL_SOCKET};
use crate::slot::SlotKind;

/// A motherboard is eligible when its socket equals the selected CPU's.
pub fn motherboard_matches_cpu(cpu: &Part, board: &Part) -> bool {
    match (cpu.socket.as_deref(), board.socket.as_deref()) {
        (Some(cpu_socket), Some(board_socket)) => attr_eq(cpu_socket, board_socket),
        _ => false,
    }
}

/// A RAM module is eligible when its memory standard equals the
/// selected motherboard's.
pub fn ram_matches_board(board: &Part, ram: &Part) -> bool {
    match (board.ram_type.as_deref(), ram.ram_type.as_deref()) {
        (Some(board_type), Some(ram_type)) => attr_eq(board_type, ram_type),
        _ => false,
    }
}

/// A cooler is eligible when it is universal or matches the socket.
pub fn cooler_fits_socket(socket: &str, cooler: &Part) -> bool {
    match cooler.socket.as_deref() {
        Some(cooler_socket) => {
            attr_eq(cooler_socket, UNIVERSAL_SOCKET) || attr_eq(cooler_socket, socket)
        }
        None => false,
    }
}

/// The socket cooling compatibility is judged against, if one is known.
///
/// The motherboard's socket takes precedence over the CPU's when both
/// are selected.
pub fn active_socket(state: &BuildState) -> Option<&str> {
    state
        .get(SlotKind::Motherboard)
        .and_then(|board| board.socket.as_deref())
        .or_else(|| {
            state
                .get(SlotKind::Cpu)
                .and_then(|cpu| cpu.socket.as_deref())
        })
}
