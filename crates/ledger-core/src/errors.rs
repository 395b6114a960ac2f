//! Cross-cutting error types for Lighthouse Ledger.
//!
//! Storage, database and model errors live in their own crates. They converge
//! into the HTTP error envelope in `ledger-server`.

use thiserror::Error;

/// Errors that can be raised by any Ledger crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (missing field, bad format, limit exceeded).
    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a validation failure with a caller-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
