use async_trait::async_trait;

use crate::error::AiError;

/// A text completion backend.
///
/// Takes fixed instruction text plus the stage's user content and returns
/// the raw reply, which callers decode with [`crate::decode::decode_strict`].
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AiError`] if the provider call fails.
    async fn complete(&self, instruction: &str, user: &str) -> Result<String, AiError>;
}
