//! Request extractors.

use axum::extract::FromRequestParts;
use http::header::AUTHORIZATION;
use http::request::Parts;
use ledger_core::identity::AuthIdentity;

use crate::error::ApiError;
use crate::state::AppState;

/// The resolved caller. Rejects with 401, or 503 when guest mode is on but
/// has no guest id.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthIdentity);

impl CurrentUser {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0.user_id
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        let identity = state.identity.resolve(authorization).await?;
        Ok(Self(identity))
    }
}
