//! HTTP error taxonomy.
//!
//! Every failure leaves a handler as an [`ApiError`], rendered as
//! `{"error": {"code": ..., "message": ...}}` with the matching status.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use ledger_ai::AiError;
use ledger_auth::AuthError;
use ledger_core::errors::CoreError;
use ledger_core::responses::ErrorResponse;
use ledger_db::error::DatabaseError;
use ledger_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    /// A workflow stage was invoked before the stage it depends on.
    #[error("{0}")]
    PreconditionFailed(String),

    #[error("Unauthorized")]
    Unauthorized,

    /// Wrong owner or missing entry; the two are deliberately indistinguishable.
    #[error("Entry not found or access denied")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Database(#[from] DatabaseError),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    AiParsing(String),

    #[error("{0}")]
    AiValidation(String),

    #[error("AI API error: {0}")]
    AiProvider(String),

    #[error("Guest mode is not configured. Set LEDGER_AUTH__GUEST_USER_ID.")]
    GuestConfig,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::PreconditionFailed(_) => "PRECONDITION_FAILED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::AiParsing(_) => "AI_PARSING_ERROR",
            Self::AiValidation(_) => "AI_VALIDATION_ERROR",
            Self::AiProvider(_) => "AI_PROVIDER_ERROR",
            Self::GuestConfig => "GUEST_CONFIG",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::PreconditionFailed(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AiProvider(_) => StatusCode::BAD_GATEWAY,
            Self::GuestConfig => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_)
            | Self::Storage(_)
            | Self::AiParsing(_)
            | Self::AiValidation(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a multipart read failure, reporting an exceeded body limit as the
    /// same validation error the size check produces.
    pub fn from_multipart(err: &MultipartError, max_upload_bytes: u64) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ledger_core::evidence_rules::file_too_large(max_upload_bytes).into()
        } else {
            Self::Validation(err.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.code(), error = %self, "request rejected");
        }
        (status, Json(ErrorResponse::new(self.code(), self.to_string()))).into_response()
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let CoreError::Validation(message) = err;
        Self::Validation(message)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        if err.is_unauthorized() {
            tracing::info!(reason = %err, "request unauthorized");
            Self::Unauthorized
        } else {
            tracing::error!(error = %err, "guest mode misconfigured");
            Self::GuestConfig
        }
    }
}

impl From<AiError> for ApiError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::Parse(_) => Self::AiParsing(err.to_string()),
            AiError::Validation(message) => Self::AiValidation(message),
            AiError::Prompt(message) => Self::Internal(message),
            AiError::NotConfigured | AiError::Http(_) | AiError::Api { .. } => {
                Self::AiProvider(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn unauthorized_never_echoes_the_reason() {
        let (status, body) =
            render(AuthError::InvalidCredential("expired token for alice".into()).into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
        assert_eq!(body["error"]["message"], "Unauthorized");
    }

    #[tokio::test]
    async fn guest_misconfiguration_is_503() {
        let (status, body) = render(AuthError::GuestMisconfigured.into()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "GUEST_CONFIG");
    }

    #[test]
    fn ai_errors_split_by_cause() {
        assert_eq!(ApiError::from(AiError::Parse("x".into())).code(), "AI_PARSING_ERROR");
        assert_eq!(
            ApiError::from(AiError::Validation("x".into())).code(),
            "AI_VALIDATION_ERROR"
        );
        let provider = ApiError::from(AiError::Api {
            status: 500,
            message: "down".into(),
        });
        assert_eq!(provider.code(), "AI_PROVIDER_ERROR");
        assert_eq!(provider.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn unconfigured_model_is_a_provider_error() {
        let err = ApiError::from(AiError::NotConfigured);
        assert_eq!(err.code(), "AI_PROVIDER_ERROR");
        assert_eq!(ApiError::from(AiError::Prompt("missing".into())).code(), "INTERNAL_ERROR");
    }

    #[test]
    fn core_validation_keeps_its_message() {
        let err = ApiError::from(CoreError::validation("title is required"));
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn parse_message_keeps_prefix() {
        let err = ApiError::from(AiError::Parse("expected value".into()));
        assert_eq!(err.to_string(), "AI returned invalid JSON: expected value");
    }

    #[test]
    fn conflicts_are_database_errors() {
        let err = ApiError::from(DatabaseError::Conflict("UNIQUE constraint failed".into()));
        assert_eq!(err.code(), "DATABASE_ERROR");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn forbidden_message_is_fixed() {
        assert_eq!(ApiError::Forbidden.to_string(), "Entry not found or access denied");
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
    }
}
