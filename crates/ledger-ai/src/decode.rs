//! Strict decoding of model replies.
//!
//! A reply is accepted only if, after removing one optional Markdown code
//! fence, it is exactly one JSON object. Anything else fails closed.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AiError;

/// A structured reply a stage expects from the model.
pub trait StagePayload: DeserializeOwned {
    /// Semantic checks serde cannot express (blank strings, missing items).
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason the payload is unusable.
    fn validate(&self) -> Result<(), String>;
}

/// Remove a surrounding ```` ```json ```` / ```` ``` ```` fence, if present.
#[must_use]
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Decode `raw` into `T`.
///
/// Parse failures become [`AiError::Parse`]; well-formed JSON with the wrong
/// shape, or failing [`StagePayload::validate`], becomes
/// [`AiError::Validation`].
///
/// # Errors
///
/// See above.
pub fn decode_strict<T: StagePayload>(raw: &str) -> Result<T, AiError> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Err(AiError::Parse("empty response".into()));
    }
    let value: Value = serde_json::from_str(body).map_err(|e| AiError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Err(AiError::Parse("expected a JSON object".into()));
    }
    let payload: T = serde_json::from_value(value)
        .map_err(|e| AiError::Validation(format!("AI response is missing required fields: {e}")))?;
    payload.validate().map_err(AiError::Validation)?;
    Ok(payload)
}
