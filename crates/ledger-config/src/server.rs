//! HTTP listener configuration.

use serde::{Deserialize, Serialize};

fn default_bind() -> String {
    String::from("0.0.0.0:3001")
}

const fn default_cors_allow_any() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Allow cross-origin requests from any origin.
    #[serde(default = "default_cors_allow_any")]
    pub cors_allow_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_allow_any: default_cors_allow_any(),
        }
    }
}
