use std::time::Duration;

use async_trait::async_trait;
use ledger_config::TranscriptConfig;
use ledger_core::text::summarize;
use serde::{Deserialize, Serialize};

use crate::error::TranscriptError;
use crate::video::normalize_video_url;

/// Something that can turn a video link into transcript text.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`TranscriptError`] when no transcript can be produced.
    async fn fetch(&self, video_url: &str) -> Result<String, TranscriptError>;
}

/// Client for an external transcript service accepting
/// `POST {"url": ...}` and answering `{"text": ...}` or
/// `{"transcript": ...}`.
pub struct TranscriptClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    max_chars: usize,
}

impl TranscriptClient {
    /// # Errors
    ///
    /// Returns [`TranscriptError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &TranscriptConfig) -> Result<Self, TranscriptError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ledger/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            max_chars: config.max_chars,
        })
    }
}

#[derive(Serialize)]
struct TranscriptRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct TranscriptResponse {
    text: Option<String>,
    transcript: Option<String>,
}

#[async_trait]
impl TranscriptSource for TranscriptClient {
    async fn fetch(&self, video_url: &str) -> Result<String, TranscriptError> {
        if self.api_url.is_empty() {
            return Err(TranscriptError::NotConfigured);
        }
        let normalized = normalize_video_url(video_url)
            .ok_or_else(|| TranscriptError::UnsupportedUrl(video_url.to_string()))?;

        let mut req = self
            .http
            .post(&self.api_url)
            .json(&TranscriptRequest { url: &normalized });
        if !self.api_key.is_empty() {
            req = req.bearer_auth(&self.api_key);
        }
        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(TranscriptError::Api {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }
        let body: TranscriptResponse = resp.json().await?;
        extract_text(body, self.max_chars)
    }
}

fn extract_text(body: TranscriptResponse, max_chars: usize) -> Result<String, TranscriptError> {
    let text = body
        .text
        .filter(|t| !t.trim().is_empty())
        .or(body.transcript)
        .filter(|t| !t.trim().is_empty())
        .ok_or(TranscriptError::Empty)?;
    Ok(summarize(&text, max_chars))
}

/// Fetch a transcript for `url` if it is a recognised video link.
///
/// Never fails: non-video links and every provider error yield `None`, with
/// the error logged at warn level.
pub async fn fetch_best_effort(source: &dyn TranscriptSource, url: &str) -> Option<String> {
    if normalize_video_url(url).is_none() {
        return None;
    }
    match source.fetch(url).await {
        Ok(text) => {
            tracing::debug!(url, chars = text.chars().count(), "transcript attached");
            Some(text)
        }
        Err(TranscriptError::NotConfigured) => None,
        Err(e) => {
            tracing::warn!(url, error = %e, "transcript fetch failed; continuing without it");
            None
        }
    }
}
