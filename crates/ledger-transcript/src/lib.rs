//! # ledger-transcript
//!
//! Best-effort transcript enrichment for video link evidence.
//!
//! A link is enriched only when it is a recognised video URL and a
//! transcript provider is configured. Failures are logged and swallowed;
//! evidence creation never waits on a transcript it cannot get.

mod client;
mod error;
mod video;

pub use client::{TranscriptClient, TranscriptSource, fetch_best_effort};
pub use error::TranscriptError;
pub use video::{is_video_url, normalize_video_url};
