use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ConfidenceBand, LayerDescriptor};

/// Immutable public record of a Medium or High evaluation.
///
/// Only the fields of [`crate::responses::PublicVerification`] are ever
/// exposed to anonymous readers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Verification {
    pub id: String,
    pub entry_id: String,
    pub public_id: String,
    pub domain: String,
    pub capability_summary: String,
    pub confidence_band: ConfidenceBand,
    pub intent_prompt: Option<String>,
    pub evidence_summary: Option<String>,
    pub layer_descriptors: [LayerDescriptor; 4],
    pub created_at: DateTime<Utc>,
}
