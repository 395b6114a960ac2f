//! # ledger-auth
//!
//! Caller identification for Lighthouse Ledger.
//!
//! - [`TokenVerifier`]: validates a bearer token and returns the user id
//! - [`HttpTokenVerifier`]: verifier backed by the identity provider's user endpoint
//! - [`IdentityResolver`]: bearer token, guest fallback, or failure

mod bearer;
mod error;
mod resolver;
mod verifier;

pub use bearer::parse_bearer;
pub use error::AuthError;
pub use resolver::{GuestMode, IdentityResolver};
pub use verifier::{HttpTokenVerifier, TokenVerifier};
