//! Calls the real provider. Run with `LEDGER_AI__API_KEY` set and
//! `cargo test -p ledger-ai -- --ignored`.

use std::sync::Arc;

use ledger_ai::{Assessor, OpenAiClient, PromptSet};
use ledger_config::AiConfig;

#[tokio::test]
#[ignore] // requires network and an API key
async fn classifies_simple_evidence() {
    let api_key = std::env::var("LEDGER_AI__API_KEY").unwrap_or_default();
    let config = AiConfig {
        api_key,
        ..AiConfig::default()
    };
    let assessor = Assessor::new(
        Arc::new(OpenAiClient::new(&config).unwrap()),
        PromptSet::builtin(),
    );
    let digest = "text: I built a small inventory tracker using spreadsheets and basic formulas \
                  to manage stock for a shop";
    let classification = assessor.classify(digest).await.unwrap();
    assert!(!classification.primary_domain.is_empty());
}
