//! Enums for evidence kinds, classification results, assessment outcomes and
//! entry status.
//!
//! Storage and wire representations are identical: the string returned by
//! `as_str()` is what lands in SQL and what serde emits.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EvidenceType
// ---------------------------------------------------------------------------

/// Kind of a piece of evidence attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    Text,
    Link,
    File,
}

impl EvidenceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Link => "link",
            Self::File => "file",
        }
    }
}

impl fmt::Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

/// Whether an entry's evidence supports a reviewable claim of capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    Eligible,
    Ineligible,
}

impl Eligibility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eligible => "eligible",
            Self::Ineligible => "ineligible",
        }
    }

    #[must_use]
    pub const fn from_flag(eligible: bool) -> Self {
        if eligible {
            Self::Eligible
        } else {
            Self::Ineligible
        }
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ComplexityLevel
// ---------------------------------------------------------------------------

/// Difficulty level the classifier assigns to the evidenced learning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ComplexityLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ComplexityLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConfidenceBand
// ---------------------------------------------------------------------------

/// Overall outcome of the answer evaluation.
///
/// Only `Medium` and `High` produce a public verification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ConfidenceBand {
    Low,
    Medium,
    High,
}

impl ConfidenceBand {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Whether an evaluation with this band is published as a verification.
    #[must_use]
    pub const fn is_verifiable(self) -> bool {
        matches!(self, Self::Medium | Self::High)
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LayerDescriptor
// ---------------------------------------------------------------------------

/// Per-layer judgement for one of the four assessment answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum LayerDescriptor {
    Strong,
    Adequate,
    #[serde(rename = "Needs work")]
    NeedsWork,
}

impl LayerDescriptor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Adequate => "Adequate",
            Self::NeedsWork => "Needs work",
        }
    }
}

impl fmt::Display for LayerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssessmentLayer
// ---------------------------------------------------------------------------

/// The four fixed layers, one per question number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentLayer {
    Explanation,
    Application,
    TradeOffs,
    Reflection,
}

impl AssessmentLayer {
    pub const ALL: [Self; 4] = [
        Self::Explanation,
        Self::Application,
        Self::TradeOffs,
        Self::Reflection,
    ];

    /// Question number (1..=4) answered under this layer.
    #[must_use]
    pub const fn question_number(self) -> u8 {
        match self {
            Self::Explanation => 1,
            Self::Application => 2,
            Self::TradeOffs => 3,
            Self::Reflection => 4,
        }
    }

    #[must_use]
    pub const fn from_question_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Explanation),
            2 => Some(Self::Application),
            3 => Some(Self::TradeOffs),
            4 => Some(Self::Reflection),
            _ => None,
        }
    }

    /// Human-readable label used in prompts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Explanation => "Explanation",
            Self::Application => "Application",
            Self::TradeOffs => "Trade-offs / limits",
            Self::Reflection => "Reflection / next steps",
        }
    }
}

// ---------------------------------------------------------------------------
// EntryStatus
// ---------------------------------------------------------------------------

/// Progress of an entry as shown on the timeline.
///
/// ```text
/// recorded_only → under_review → reviewed → reviewed_link_available
/// ```
///
/// Derived on read from the presence of questions, a confidence band and a
/// public id; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EntryStatus {
    #[serde(rename = "Recorded only")]
    RecordedOnly,
    #[serde(rename = "Under review")]
    UnderReview,
    #[serde(rename = "Reviewed")]
    Reviewed,
    #[serde(rename = "Reviewed – link available")]
    ReviewedLinkAvailable,
}

impl EntryStatus {
    /// Pick the most advanced status the entry's artifacts justify.
    #[must_use]
    pub const fn derive(has_public_id: bool, has_confidence_band: bool, has_questions: bool) -> Self {
        if has_public_id {
            Self::ReviewedLinkAvailable
        } else if has_confidence_band {
            Self::Reviewed
        } else if has_questions {
            Self::UnderReview
        } else {
            Self::RecordedOnly
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RecordedOnly => "Recorded only",
            Self::UnderReview => "Under review",
            Self::Reviewed => "Reviewed",
            Self::ReviewedLinkAvailable => "Reviewed – link available",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
