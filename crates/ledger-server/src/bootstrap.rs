//! Builds [`AppState`] from configuration.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use ledger_ai::{Assessor, OpenAiClient, PromptSet};
use ledger_auth::{GuestMode, HttpTokenVerifier, IdentityResolver};
use ledger_config::LedgerConfig;
use ledger_db::LedgerDb;
use ledger_storage::EvidenceStore;
use ledger_transcript::TranscriptClient;

use crate::state::AppState;

/// Construct every client once.
///
/// # Errors
///
/// Fails if the database, object store, prompt templates or an HTTP client
/// cannot be set up.
pub async fn build_state(config: &LedgerConfig) -> anyhow::Result<AppState> {
    let db = LedgerDb::open(&config.database)
        .await
        .context("failed to open ledger database")?;
    let storage =
        EvidenceStore::from_config(&config.storage).context("failed to initialize evidence store")?;

    let verifier = HttpTokenVerifier::new(&config.auth).context("failed to build token verifier")?;
    let identity = IdentityResolver::new(Arc::new(verifier), GuestMode::from_config(&config.auth));

    let prompts = PromptSet::load(config.ai.prompt_dir.as_deref().map(Path::new))
        .context("failed to load prompt templates")?;
    let model = OpenAiClient::new(&config.ai).context("failed to build model client")?;

    let transcripts =
        TranscriptClient::new(&config.transcript).context("failed to build transcript client")?;

    tracing::info!(
        remote_db = config.database.is_configured(),
        s3 = config.storage.is_configured(),
        guest_mode = config.auth.guest_mode,
        model = %config.ai.model,
        transcripts = config.transcript.is_configured(),
        "application state ready"
    );

    Ok(AppState {
        db: Arc::new(db),
        storage,
        identity: Arc::new(identity),
        assessor: Assessor::new(Arc::new(model), prompts),
        transcripts: Arc::new(transcripts),
        limits: config.limits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builds_from_local_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = LedgerConfig::default();
        config.database.local_path = dir.path().join("ledger.db").to_string_lossy().into_owned();
        config.storage.local_root = dir.path().join("objects").to_string_lossy().into_owned();

        let state = build_state(&config).await.unwrap();
        assert_eq!(state.limits.evidence_char_budget, 500);
        assert!(dir.path().join("objects").is_dir());
    }

    #[tokio::test]
    async fn missing_prompt_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = LedgerConfig::default();
        config.database.local_path = dir.path().join("ledger.db").to_string_lossy().into_owned();
        config.storage.local_root = dir.path().join("objects").to_string_lossy().into_owned();
        config.ai.prompt_dir = Some(dir.path().join("nope").to_string_lossy().into_owned());

        assert!(build_state(&config).await.is_err());
    }
}
