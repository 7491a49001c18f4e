//! Export error types.

use thiserror::Error;

/// Errors that can occur when exporting or sharing a quote.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The quote has no lines; exporting it would produce a blank
    /// document. Callers must project a non-empty build first.
    #[error("Cannot export an empty quote")]
    EmptyQuote,

    /// Rendering failed.
    #[error("Render error: {0}")]
    Render(String),
}
