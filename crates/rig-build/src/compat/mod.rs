//! Compatibility module.
//!
//! Pure rules linking dependent slots, and the candidate filter that
//! applies them to a catalog snapshot.

mod filter;
mod rules;

pub use filter::{candidates, is_locked};
pub use rules::{active_socket, cooler_fits_socket, motherboard_matches_cpu, ram_matches_board};
