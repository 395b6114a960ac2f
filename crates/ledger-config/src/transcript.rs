//! Video transcript provider configuration.

use serde::{Deserialize, Serialize};

const fn default_max_chars() -> usize {
    15_000
}

const fn default_timeout_secs() -> u64 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranscriptConfig {
    /// Endpoint accepting `POST {"url": ...}`. Empty disables transcripts.
    #[serde(default)]
    pub api_url: String,

    #[serde(default)]
    pub api_key: String,

    /// Transcripts longer than this are cut and suffixed with an ellipsis.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_key: String::new(),
            max_chars: default_max_chars(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TranscriptConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_url.is_empty()
    }
}
