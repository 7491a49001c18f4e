//! Quote export and share-text surface for RigForge.
//!
//! Consumes the engine's projected [`Quote`](rig_build::quote::Quote)
//! and turns it into deliverable artifacts: a printable document via
//! the [`QuoteExporter`] seam, or a human-readable share message via
//! [`share_text`]. Delivery (files, messaging, network) belongs to the
//! callers.

mod document;
mod error;
mod share;

pub use document::{ExportedDocument, QuoteExporter, TextQuoteExporter};
pub use error::ExportError;
pub use share::share_text;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{share_text, ExportError, ExportedDocument, QuoteExporter, TextQuoteExporter};
}
