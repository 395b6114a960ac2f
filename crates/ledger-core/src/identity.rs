use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the caller's user id was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IdentitySource {
    /// Bearer token validated by the identity provider.
    Bearer,
    /// No credential presented; the configured guest id was used.
    Guest,
}

/// Resolved caller identity.
///
/// Produced by `ledger-auth`, consumed by the request handlers in
/// `ledger-server`. Data only, no provider calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    pub user_id: String,
    pub source: IdentitySource,
}

impl AuthIdentity {
    pub fn bearer(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            source: IdentitySource::Bearer,
        }
    }

    pub fn guest(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            source: IdentitySource::Guest,
        }
    }
}
