use ledger_ai::GeneratedQuestions;
use ledger_core::requests::EntryRef;

use super::evidence_digest;
use crate::error::ApiError;
use crate::ownership::owned_entry;
use crate::state::AppState;

/// Generate the four assessment questions for a classified entry.
///
/// Nothing is stored unless the model returns all four.
pub async fn generate(
    state: &AppState,
    user_id: &str,
    req: EntryRef,
) -> Result<GeneratedQuestions, ApiError> {
    let entry_id = req.validate()?;
    let entry = owned_entry(&state.db, &entry_id, user_id).await?;
    let Some(domain) = entry.domain.as_deref().filter(|_| entry.is_classified()) else {
        return Err(ApiError::PreconditionFailed(
            "Entry must be analyzed before generating questions".into(),
        ));
    };

    let (_, digest) = evidence_digest(state, &entry_id).await?;
    let generated = state
        .assessor
        .generate_questions(&digest, domain, entry.intent_prompt.as_deref())
        .await?;

    state
        .db
        .upsert_questions(&entry_id, &generated.clone().into_array())
        .await?;
    tracing::info!(entry_id = %entry_id, "assessment questions stored");
    Ok(generated)
}
