//! Build state module.
//!
//! The mutable, session-owned configuration of selected parts.

mod state;

pub use state::{BuildState, SlotSelections};
