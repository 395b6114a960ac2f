//! Identifier helpers.
//!
//! Row ids are random UUID v4 strings. Public verification ids are derived
//! from the entry id and the evaluation timestamp.

use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::errors::CoreError;

/// Length of a public verification id in hex characters.
pub const PUBLIC_ID_LEN: usize = 16;

/// Generate a new random row id.
#[must_use]
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Validate a caller-supplied UUID and return it in canonical lowercase form.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming `field` when the value is empty or
/// not a UUID.
pub fn parse_uuid(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Uuid::parse_str(trimmed)
        .map(|id| id.to_string())
        .map_err(|_| CoreError::validation(format!("{field} must be a valid UUID")))
}

/// Derive the public id for a verification created at `at`.
///
/// First 16 hex characters of `sha256("{entry_id}-{rfc3339 millis}")`.
#[must_use]
pub fn derive_public_id(entry_id: &str, at: DateTime<Utc>) -> String {
    let stamp = at.to_rfc3339_opts(SecondsFormat::Millis, true);
    let digest = Sha256::digest(format!("{entry_id}-{stamp}").as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(PUBLIC_ID_LEN);
    id
}
