use ledger_ai::Classification;
use ledger_core::enums::Eligibility;
use ledger_core::requests::EntryRef;

use super::evidence_digest;
use crate::error::ApiError;
use crate::ownership::owned_entry;
use crate::state::AppState;

/// Classify an entry's evidence and store the domain and eligibility.
pub async fn classify(
    state: &AppState,
    user_id: &str,
    req: EntryRef,
) -> Result<Classification, ApiError> {
    let entry_id = req.validate()?;
    owned_entry(&state.db, &entry_id, user_id).await?;

    let (evidence, digest) = evidence_digest(state, &entry_id).await?;
    if evidence.is_empty() {
        return Err(ApiError::not_found("No evidence found for this entry"));
    }

    let classification = state.assessor.classify(&digest).await?;
    let eligibility = Eligibility::from_flag(classification.eligible);
    state
        .db
        .record_classification(&entry_id, classification.primary_domain.trim(), eligibility)
        .await?;

    tracing::info!(
        entry_id = %entry_id,
        domain = %classification.primary_domain,
        %eligibility,
        "entry classified"
    );
    Ok(classification)
}
