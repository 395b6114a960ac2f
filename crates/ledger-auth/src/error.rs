use thiserror::Error;

/// Why a caller could not be identified.
///
/// The reason strings are for logs only; the HTTP layer answers every
/// credential failure with a bare `Unauthorized`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer credential")]
    MissingCredential,

    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    #[error("identity provider not configured")]
    ProviderNotConfigured,

    #[error("identity provider error: {0}")]
    Provider(String),

    #[error("guest mode is enabled but no guest user id is configured")]
    GuestMisconfigured,
}

impl AuthError {
    /// Credential problems the caller can fix by signing in again.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        !matches!(self, Self::GuestMisconfigured)
    }
}
