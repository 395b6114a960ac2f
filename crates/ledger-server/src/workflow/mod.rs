//! The entry workflow, one module per stage.
//!
//! Handlers in [`crate::routes`] only extract and respond; all checks,
//! ordering of side effects and external calls live here.
//!
//! ```text
//! create entry → add evidence → save intent → classify → questions → evaluate → verify
//! ```

pub mod classify;
pub mod evaluate;
pub mod intake;
pub mod questions;
pub mod timeline;

use ledger_ai::render;
use ledger_core::entities::Evidence;

use crate::error::ApiError;
use crate::state::AppState;

/// An entry's evidence in recording order together with its prompt digest.
pub(crate) async fn evidence_digest(
    state: &AppState,
    entry_id: &str,
) -> Result<(Vec<Evidence>, String), ApiError> {
    let evidence = state.db.list_evidence_chronological(entry_id).await?;
    let digest = render::evidence_digest(&evidence, state.limits.evidence_char_budget);
    Ok((evidence, digest))
}
