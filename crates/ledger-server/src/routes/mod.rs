//! HTTP handlers. Each one extracts its inputs, calls into
//! [`crate::workflow`] and wraps the result in JSON.

pub mod ai;
pub mod entries;
pub mod evidence;
pub mod verify;

pub async fn health() -> &'static str {
    "ok"
}
