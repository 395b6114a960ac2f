//! Calls a real transcript service. Set `LEDGER_TRANSCRIPT__API_URL` (and
//! optionally `LEDGER_TRANSCRIPT__API_KEY`), then run with `--ignored`.

use ledger_config::TranscriptConfig;
use ledger_transcript::{TranscriptClient, TranscriptSource};

#[tokio::test]
#[ignore] // requires network and a transcript provider
async fn fetches_a_public_video_transcript() {
    let config = TranscriptConfig {
        api_url: std::env::var("LEDGER_TRANSCRIPT__API_URL").unwrap_or_default(),
        api_key: std::env::var("LEDGER_TRANSCRIPT__API_KEY").unwrap_or_default(),
        ..TranscriptConfig::default()
    };
    let client = TranscriptClient::new(&config).unwrap();
    let text = client
        .fetch("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await
        .unwrap();
    assert!(!text.is_empty());
}
