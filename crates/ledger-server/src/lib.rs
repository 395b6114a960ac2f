//! # ledger-server
//!
//! HTTP API for Lighthouse Ledger, served by the `ledgerd` binary.
//!
//! Handlers resolve the caller through the identity resolver, check entry
//! ownership and drive the workflow stages against injected clients held in
//! [`AppState`]. Errors leave as [`ApiError`] with a stable code.

pub mod app;
pub mod bootstrap;
pub mod config_warnings;
pub mod error;
pub mod extract;
pub mod ownership;
pub mod routes;
pub mod state;
pub mod workflow;

pub use app::{app, router};
pub use error::ApiError;
pub use state::AppState;
