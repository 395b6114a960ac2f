//! Response bodies returned by the HTTP surface.
//!
//! Field names follow the wire format used by the browser client, which is
//! why a few public-verification fields are camelCase.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Entry, Evidence, Verification};
use crate::enums::{ConfidenceBand, EntryStatus, EvidenceType, LayerDescriptor};
use crate::text::summarize;

/// Placeholder timeline summary for entries without evidence.
pub const NO_EVIDENCE_SUMMARY: &str = "No evidence yet";

/// Placeholder title for entries stored with an empty title.
pub const UNTITLED: &str = "Untitled";

// ---------------------------------------------------------------------------
// Intake
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateEntryResponse {
    pub entry_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AddEvidenceResponse {
    pub evidence_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SaveIntentResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EvidenceListResponse {
    pub evidence: Vec<Evidence>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SignedUrlResponse {
    pub url: String,
    pub expires_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EvaluateAnswersResponse {
    pub capability_summary: String,
    pub confidence_band: ConfidenceBand,
    pub rationale: String,
    pub layer1_descriptor: LayerDescriptor,
    pub layer2_descriptor: LayerDescriptor,
    pub layer3_descriptor: LayerDescriptor,
    pub layer4_descriptor: LayerDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

// ---------------------------------------------------------------------------
// PublicVerification
// ---------------------------------------------------------------------------

/// The anonymous view of a verification record. Never carries the entry id
/// or anything else that identifies the owner.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PublicVerification {
    pub public_id: String,
    pub domain: String,
    #[serde(rename = "capabilitySummary")]
    pub capability_summary: String,
    #[serde(rename = "confidenceBand")]
    pub confidence_band: ConfidenceBand,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_summary: Option<String>,
    pub layer1_descriptor: LayerDescriptor,
    pub layer2_descriptor: LayerDescriptor,
    pub layer3_descriptor: LayerDescriptor,
    pub layer4_descriptor: LayerDescriptor,
}

impl From<Verification> for PublicVerification {
    fn from(v: Verification) -> Self {
        let [layer1, layer2, layer3, layer4] = v.layer_descriptors;
        Self {
            public_id: v.public_id,
            domain: v.domain,
            capability_summary: v.capability_summary,
            confidence_band: v.confidence_band,
            created_at: v.created_at,
            intent_prompt: v.intent_prompt,
            evidence_summary: v.evidence_summary,
            layer1_descriptor: layer1,
            layer2_descriptor: layer2,
            layer3_descriptor: layer3,
            layer4_descriptor: layer4,
        }
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub evidence_summary: String,
    pub status: EntryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_evidence_id: Option<String>,
}

impl TimelineEntry {
    /// Assemble one timeline row from an entry and its related artifacts.
    ///
    /// `evidence` is the entry's primary (earliest) evidence item, if any.
    #[must_use]
    pub fn compose(
        entry: &Entry,
        evidence: Option<&Evidence>,
        public_id: Option<String>,
        has_questions: bool,
        summary_chars: usize,
    ) -> Self {
        let status = EntryStatus::derive(
            public_id.is_some(),
            entry.confidence_band.is_some(),
            has_questions,
        );
        let file_evidence_id = evidence
            .filter(|ev| ev.evidence_type == EvidenceType::File)
            .map(|ev| ev.id.clone());
        let title = if entry.title.trim().is_empty() {
            UNTITLED.to_string()
        } else {
            entry.title.clone()
        };

        Self {
            id: entry.id.clone(),
            created_at: entry.created_at,
            title,
            evidence_summary: evidence_summary(evidence, summary_chars),
            status,
            public_id,
            file_evidence_id,
        }
    }
}

/// One-line description of an entry's primary evidence.
///
/// Files are shown as `File: {name}`; other kinds show their content. The
/// result is cut to `max_chars` with a trailing ellipsis.
#[must_use]
pub fn evidence_summary(evidence: Option<&Evidence>, max_chars: usize) -> String {
    let raw = match evidence {
        Some(ev) if ev.evidence_type == EvidenceType::File => {
            let name = ev.original_filename.as_deref().unwrap_or(&ev.content);
            format!("File: {name}")
        }
        Some(ev) => ev.content.clone(),
        None => String::new(),
    };
    if raw.trim().is_empty() {
        NO_EVIDENCE_SUMMARY.to_string()
    } else {
        summarize(&raw, max_chars)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimelineResponse {
    pub entries: Vec<TimelineEntry>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}
