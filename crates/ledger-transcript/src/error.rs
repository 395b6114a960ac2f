use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("transcript provider is not configured")]
    NotConfigured,

    #[error("not a recognised video link: {0}")]
    UnsupportedUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned no transcript")]
    Empty,
}
