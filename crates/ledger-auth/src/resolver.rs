//! Maps an inbound `Authorization` header to a user identity.
//!
//! This is the only place that looks at the guest-mode switch.

use std::sync::Arc;

use ledger_config::AuthConfig;
use ledger_core::identity::AuthIdentity;

use crate::bearer::parse_bearer;
use crate::error::AuthError;
use crate::verifier::TokenVerifier;

/// Guest-mode setting as seen by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestMode {
    Disabled,
    /// Enabled, with the configured guest id (blank means misconfigured).
    Enabled(String),
}

impl GuestMode {
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        if config.guest_mode {
            Self::Enabled(config.guest_user_id.trim().to_string())
        } else {
            Self::Disabled
        }
    }
}

pub struct IdentityResolver {
    verifier: Arc<dyn TokenVerifier>,
    guest: GuestMode,
}

impl IdentityResolver {
    pub fn new(verifier: Arc<dyn TokenVerifier>, guest: GuestMode) -> Self {
        Self { verifier, guest }
    }

    /// Resolve the caller from the raw `Authorization` header value.
    ///
    /// - A bearer token is always validated, guest mode or not.
    /// - Without one, guest mode yields the guest id, or
    ///   [`AuthError::GuestMisconfigured`] if none is set.
    /// - Without one and without guest mode the caller is unauthorized.
    ///
    /// # Errors
    ///
    /// See above.
    pub async fn resolve(&self, authorization: Option<&str>) -> Result<AuthIdentity, AuthError> {
        if let Some(token) = parse_bearer(authorization) {
            let user_id = self.verifier.verify(token).await.inspect_err(|e| {
                tracing::debug!(error = %e, "bearer token rejected");
            })?;
            return Ok(AuthIdentity::bearer(user_id));
        }

        match &self.guest {
            GuestMode::Enabled(id) if id.is_empty() => Err(AuthError::GuestMisconfigured),
            GuestMode::Enabled(id) => Ok(AuthIdentity::guest(id.clone())),
            GuestMode::Disabled => Err(AuthError::MissingCredential),
        }
    }
}
