//! Engine error types.

use thiserror::Error;

/// Errors that can occur in build configuration operations.
#[derive(Error, Debug)]
pub enum BuildError {
    /// No slot is filled, so there is nothing to quote or share.
    #[error("Nothing to quote: no parts selected")]
    EmptyBuild,

    /// A slot name from outside the engine did not parse.
    #[error("Unknown slot: {0}")]
    UnknownSlot(String),

    /// Saved build not found in the store.
    #[error("Build not found: {0}")]
    BuildNotFound(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BuildError {
    fn from(e: serde_json::Error) -> Self {
        BuildError::SerializationError(e.to_string())
    }
}
