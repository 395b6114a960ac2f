//! Identity provider and guest mode configuration.

use serde::{Deserialize, Serialize};

const fn default_guest_mode() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Base URL of the identity provider (e.g., `https://xyz.supabase.co`).
    #[serde(default)]
    pub provider_url: String,

    /// Service key sent as `apikey` when validating tokens.
    #[serde(default)]
    pub api_key: String,

    /// Accept requests without a bearer token as the guest user.
    #[serde(default = "default_guest_mode")]
    pub guest_mode: bool,

    /// User id assigned to guest requests. Required when `guest_mode` is on.
    #[serde(default)]
    pub guest_user_id: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider_url: String::new(),
            api_key: String::new(),
            guest_mode: default_guest_mode(),
            guest_user_id: String::new(),
        }
    }
}

impl AuthConfig {
    /// Check if bearer tokens can be validated.
    pub fn is_configured(&self) -> bool {
        !self.provider_url.is_empty() && !self.api_key.is_empty()
    }

    /// Guest mode is on but no guest id is set.
    pub fn guest_misconfigured(&self) -> bool {
        self.guest_mode && self.guest_user_id.trim().is_empty()
    }
}
