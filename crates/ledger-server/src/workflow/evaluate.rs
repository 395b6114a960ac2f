use chrono::{DateTime, Utc};
use ledger_ai::Evaluation;
use ledger_core::entities::{Entry, Evidence, Verification};
use ledger_core::ids::derive_public_id;
use ledger_core::requests::EvaluateAnswersRequest;
use ledger_core::responses::{EvaluateAnswersResponse, evidence_summary};
use ledger_db::NewVerification;

use super::evidence_digest;
use crate::error::ApiError;
use crate::ownership::owned_entry;
use crate::state::AppState;

/// Domain recorded on a verification for an entry that was never classified.
const UNKNOWN_DOMAIN: &str = "Unknown";

/// Evaluate four answers and publish a verification for Medium or High.
///
/// Answers are stored before the model is called so a failed evaluation
/// never loses them. The verification is inserted before the entry is
/// updated; a failed insert leaves the entry unchanged.
pub async fn evaluate(
    state: &AppState,
    user_id: &str,
    req: EvaluateAnswersRequest,
) -> Result<EvaluateAnswersResponse, ApiError> {
    let (entry_id, answers) = req.validate()?;
    let entry = owned_entry(&state.db, &entry_id, user_id).await?;

    let questions = state.db.list_questions(&entry_id).await?;
    if questions.len() != 4 {
        return Err(ApiError::PreconditionFailed(
            "Questions must be generated before evaluation".into(),
        ));
    }

    state.db.upsert_answers(&entry_id, &answers).await?;

    let (evidence, digest) = evidence_digest(state, &entry_id).await?;
    let evaluation = state
        .assessor
        .evaluate(&digest, entry.domain.as_deref(), &questions, &answers)
        .await?;

    let verification = if evaluation.confidence_band.is_verifiable() {
        Some(publish(state, &entry, evidence.first(), &evaluation, Utc::now()).await?)
    } else {
        None
    };

    state
        .db
        .record_evaluation(
            &entry_id,
            &evaluation.capability_summary,
            evaluation.confidence_band,
        )
        .await?;

    tracing::info!(
        entry_id = %entry_id,
        band = %evaluation.confidence_band,
        public_id = verification.as_ref().map(|v| v.public_id.as_str()),
        "answers evaluated"
    );

    let (verification_id, public_id) = verification.map(|v| (v.id, v.public_id)).unzip();
    Ok(EvaluateAnswersResponse {
        capability_summary: evaluation.capability_summary,
        confidence_band: evaluation.confidence_band,
        rationale: evaluation.rationale,
        layer1_descriptor: evaluation.layer1_descriptor,
        layer2_descriptor: evaluation.layer2_descriptor,
        layer3_descriptor: evaluation.layer3_descriptor,
        layer4_descriptor: evaluation.layer4_descriptor,
        verification_id,
        public_id,
    })
}

/// Insert the public record for an evaluation made at `at`.
///
/// The public id is derived from the entry id and `at`; a record that
/// already holds the same id fails the insert with a conflict.
pub async fn publish(
    state: &AppState,
    entry: &Entry,
    primary_evidence: Option<&Evidence>,
    evaluation: &Evaluation,
    at: DateTime<Utc>,
) -> Result<Verification, ApiError> {
    let public_id = derive_public_id(&entry.id, at);
    let summary = primary_evidence.map(|ev| evidence_summary(Some(ev), state.limits.summary_chars));
    let domain = entry
        .domain
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(UNKNOWN_DOMAIN);

    let verification = state
        .db
        .create_verification(&NewVerification {
            entry_id: &entry.id,
            public_id: &public_id,
            domain,
            capability_summary: &evaluation.capability_summary,
            confidence_band: evaluation.confidence_band,
            intent_prompt: entry.intent_prompt.as_deref(),
            evidence_summary: summary.as_deref(),
            layer_descriptors: evaluation.layer_descriptors(),
            created_at: at,
        })
        .await?;
    Ok(verification)
}
