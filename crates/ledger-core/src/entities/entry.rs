use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ConfidenceBand, Eligibility};

/// A learning record owned by one user.
///
/// Classification fills `domain` and `eligibility`; evaluation fills
/// `capability_summary` and `confidence_band`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub intent_prompt: Option<String>,
    pub domain: Option<String>,
    pub eligibility: Option<Eligibility>,
    pub capability_summary: Option<String>,
    pub confidence_band: Option<ConfidenceBand>,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// True once classification has stored both a domain and an eligibility.
    #[must_use]
    pub fn is_classified(&self) -> bool {
        self.domain.as_deref().is_some_and(|d| !d.trim().is_empty()) && self.eligibility.is_some()
    }
}
