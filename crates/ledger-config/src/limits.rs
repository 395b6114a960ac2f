//! Intake and prompt size limits.

use serde::{Deserialize, Serialize};

const fn default_evidence_char_budget() -> usize {
    500
}

const fn default_max_upload_bytes() -> u64 {
    25 * 1024 * 1024
}

const fn default_summary_chars() -> usize {
    80
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Characters of each evidence item included in model prompts.
    #[serde(default = "default_evidence_char_budget")]
    pub evidence_char_budget: usize,

    /// Largest accepted evidence upload.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,

    /// Length of the evidence summary shown on the timeline.
    #[serde(default = "default_summary_chars")]
    pub summary_chars: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            evidence_char_budget: default_evidence_char_budget(),
            max_upload_bytes: default_max_upload_bytes(),
            summary_chars: default_summary_chars(),
        }
    }
}
