//! Part catalog module.
//!
//! Contains the catalog part record and the read-only catalog source
//! the engine draws candidates from.

pub(crate) mod part;
mod source;

pub use part::{Part, UNIVERSAL_SOCKET};
pub use source::{CatalogSource, InMemoryCatalog};
