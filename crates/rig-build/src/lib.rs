//! Build configuration and compatibility engine for RigForge.
//!
//! This crate provides the domain types and logic for assembling a
//! custom PC from a catalog of discrete parts:
//!
//! - **Catalog**: Parts with compatibility attributes, read-only
//!   catalog sources
//! - **Compat**: Cross-slot compatibility rules and candidate filtering
//! - **Build**: The session-owned build state with a derived total
//! - **Quote**: Ordered line-item projection for export and sharing
//! - **Persist**: Saved build records and the storage seam
//!
//! # Example
//!
//! ```rust,ignore
//! use rig_build::prelude::*;
//!
//! let catalog = InMemoryCatalog::with_parts(load_parts()?);
//! let mut build = BuildState::new();
//!
//! // Offer only compatible motherboards once a CPU is chosen
//! build.select(SlotKind::Cpu, am5_cpu);
//! let boards = candidates(SlotKind::Motherboard, &catalog.parts(), &build);
//!
//! // Project a quote for export
//! let quote = Quote::project(&build)?;
//! println!("Total: {}", quote.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod slot;

pub mod build;
pub mod catalog;
pub mod compat;
pub mod persist;
pub mod quote;

pub use error::BuildError;
pub use ids::*;
pub use money::{Currency, Money};
pub use slot::SlotKind;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::BuildError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::slot::SlotKind;

    // Catalog
    pub use crate::catalog::{CatalogSource, InMemoryCatalog, Part, UNIVERSAL_SOCKET};

    // Compat
    pub use crate::compat::{candidates, is_locked};

    // Build
    pub use crate::build::{BuildState, SlotSelections};

    // Quote
    pub use crate::quote::{Quote, QuoteLine};

    // Persist
    pub use crate::persist::{BuildStore, InMemoryBuildStore, SavedBuildRecord};
}
