//! Bearer token validation against the identity provider.

use async_trait::async_trait;
use ledger_config::AuthConfig;
use serde::Deserialize;
use std::time::Duration;

use crate::error::AuthError;

/// Turns a bearer token into the user id it belongs to.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the token is not accepted.
    async fn verify(&self, token: &str) -> Result<String, AuthError>;
}

/// User payload returned by `GET {provider}/auth/v1/user`.
#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
}

/// Validates tokens by asking the provider's user endpoint who they belong to.
pub struct HttpTokenVerifier {
    http: reqwest::Client,
    provider_url: String,
    api_key: String,
}

impl HttpTokenVerifier {
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] if the HTTP client cannot be built.
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ledgerd/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AuthError::Provider(format!("build client: {e}")))?;
        Ok(Self {
            http,
            provider_url: config.provider_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn is_configured(&self) -> bool {
        !self.provider_url.is_empty() && !self.api_key.is_empty()
    }
}

#[async_trait]
impl TokenVerifier for HttpTokenVerifier {
    async fn verify(&self, token: &str) -> Result<String, AuthError> {
        if !self.is_configured() {
            return Err(AuthError::ProviderNotConfigured);
        }

        let response = self
            .http
            .get(format!("{}/auth/v1/user", self.provider_url))
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::Provider(format!("user lookup: {e}")))?;

        let status = response.status();
        if status.is_client_error() {
            return Err(AuthError::InvalidCredential(format!("provider answered {status}")));
        }
        let user = response
            .error_for_status()
            .map_err(|e| AuthError::Provider(format!("user lookup: {e}")))?
            .json::<ProviderUser>()
            .await
            .map_err(|e| AuthError::InvalidCredential(format!("parse user: {e}")))?;

        if user.id.trim().is_empty() {
            return Err(AuthError::InvalidCredential("user payload has empty id".into()));
        }
        Ok(user.id)
    }
}
