//! Model call error types.

use thiserror::Error;

/// Errors from a model call, split by where the call went wrong.
#[derive(Debug, Error)]
pub enum AiError {
    /// No API key configured.
    #[error("model provider is not configured")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success status code.
    #[error("provider error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The model's reply is not valid JSON.
    #[error("AI returned invalid JSON: {0}")]
    Parse(String),

    /// The reply is JSON but lacks required fields or has wrong types.
    #[error("{0}")]
    Validation(String),

    /// An instruction template could not be loaded.
    #[error("prompt template error: {0}")]
    Prompt(String),
}

