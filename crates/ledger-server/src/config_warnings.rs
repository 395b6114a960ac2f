use ledger_config::{ENV_PREFIX, LedgerConfig};

/// Warn about settings that look mistyped or incomplete.
pub fn warn_unconfigured(config: &LedgerConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LedgerConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let prefixed = |section: &str| has_env_prefix(&env_keys, &format!("{ENV_PREFIX}{section}"));

    let mut warnings = Vec::new();

    if config.auth.guest_misconfigured() {
        warnings.push(
            "Guest mode is enabled but auth.guest_user_id is empty; every unauthenticated request will fail with GUEST_CONFIG. Set LEDGER_AUTH__GUEST_USER_ID."
                .to_string(),
        );
    }

    if !config.database.is_configured() && prefixed("DATABASE") {
        warnings.push(
            "Database config appears default while LEDGER_DATABASE* env vars exist. Use double underscores (example: LEDGER_DATABASE__URL)."
                .to_string(),
        );
    }

    if !config.storage.is_configured() && prefixed("STORAGE") {
        warnings.push(
            "Storage config appears default while LEDGER_STORAGE* env vars exist. Use double underscores (example: LEDGER_STORAGE__ENDPOINT)."
                .to_string(),
        );
    }

    if !config.ai.is_configured() {
        if prefixed("AI") {
            warnings.push(
                "AI config appears default while LEDGER_AI* env vars exist. Use double underscores (example: LEDGER_AI__API_KEY)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "No AI API key configured; analyze, questions and evaluate will fail until LEDGER_AI__API_KEY is set."
                    .to_string(),
            );
        }
    }

    if !config.transcript.is_configured() && prefixed("TRANSCRIPT") {
        warnings.push(
            "Transcript config appears default while LEDGER_TRANSCRIPT* env vars exist. Use double underscores (example: LEDGER_TRANSCRIPT__API_URL)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
