//! Structured replies for the three model stages.

use ledger_core::enums::{ComplexityLevel, ConfidenceBand, LayerDescriptor};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::decode::StagePayload;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Classification {
    pub primary_domain: String,
    #[serde(default)]
    pub secondary_domain: Option<String>,
    pub complexity_level: ComplexityLevel,
    pub eligible: bool,
    pub eligibility_reason: String,
    #[serde(default)]
    pub key_topics: Vec<String>,
    #[serde(default)]
    pub evaluator_lens: String,
}

impl StagePayload for Classification {
    fn validate(&self) -> Result<(), String> {
        if self.primary_domain.trim().is_empty() {
            return Err("AI did not return a primary domain".into());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GeneratedQuestions
// ---------------------------------------------------------------------------

/// Four questions, one per assessment layer, in layer order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GeneratedQuestions {
    #[serde(default)]
    pub q1: String,
    #[serde(default)]
    pub q2: String,
    #[serde(default)]
    pub q3: String,
    #[serde(default)]
    pub q4: String,
}

impl GeneratedQuestions {
    #[must_use]
    pub fn into_array(self) -> [String; 4] {
        [self.q1, self.q2, self.q3, self.q4]
    }
}

impl StagePayload for GeneratedQuestions {
    fn validate(&self) -> Result<(), String> {
        let all_present = [&self.q1, &self.q2, &self.q3, &self.q4]
            .iter()
            .all(|q| !q.trim().is_empty());
        if all_present {
            Ok(())
        } else {
            Err("AI did not return all 4 required questions".into())
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Evaluation {
    pub capability_summary: String,
    pub confidence_band: ConfidenceBand,
    pub rationale: String,
    pub layer1_descriptor: LayerDescriptor,
    pub layer2_descriptor: LayerDescriptor,
    pub layer3_descriptor: LayerDescriptor,
    pub layer4_descriptor: LayerDescriptor,
}

impl Evaluation {
    #[must_use]
    pub const fn layer_descriptors(&self) -> [LayerDescriptor; 4] {
        [
            self.layer1_descriptor,
            self.layer2_descriptor,
            self.layer3_descriptor,
            self.layer4_descriptor,
        ]
    }
}

impl StagePayload for Evaluation {
    fn validate(&self) -> Result<(), String> {
        if self.capability_summary.trim().is_empty() {
            return Err("AI did not return a capability summary".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_strict;
    use crate::error::AiError;
    use pretty_assertions::assert_eq;

    #[test]
    fn classification_with_optional_fields_absent() {
        let c: Classification = decode_strict(
            r#"{"primary_domain":"Data analysis","complexity_level":"Beginner",
                "eligible":true,"eligibility_reason":"Concrete artifact"}"#,
        )
        .unwrap();
        assert_eq!(c.secondary_domain, None);
        assert!(c.key_topics.is_empty());
        assert_eq!(c.complexity_level, ComplexityLevel::Beginner);
    }

    #[test]
    fn classification_rejects_unknown_complexity() {
        let err = decode_strict::<Classification>(
            r#"{"primary_domain":"X","complexity_level":"Expert","eligible":true,"eligibility_reason":"r"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AiError::Validation(_)));
    }

    #[test]
    fn three_questions_fail_validation() {
        let err =
            decode_strict::<GeneratedQuestions>(r#"{"q1":"a","q2":"b","q3":"c"}"#).unwrap_err();
        assert_eq!(err.to_string(), "AI did not return all 4 required questions");
    }

    #[test]
    fn blank_question_fails_validation() {
        let err = decode_strict::<GeneratedQuestions>(r#"{"q1":"a","q2":" ","q3":"c","q4":"d"}"#)
            .unwrap_err();
        assert!(matches!(err, AiError::Validation(_)));
    }

    #[test]
    fn questions_keep_layer_order() {
        let q: GeneratedQuestions =
            decode_strict(r#"{"q4":"d","q3":"c","q2":"b","q1":"a"}"#).unwrap();
        assert_eq!(q.into_array(), ["a", "b", "c", "d"].map(String::from));
    }

    #[test]
    fn evaluation_descriptors_in_layer_order() {
        let e: Evaluation = decode_strict(
            r#"{"capability_summary":"Can build trackers","confidence_band":"Medium",
                "rationale":"ok","layer1_descriptor":"Strong","layer2_descriptor":"Adequate",
                "layer3_descriptor":"Needs work","layer4_descriptor":"Strong"}"#,
        )
        .unwrap();
        assert_eq!(
            e.layer_descriptors(),
            [
                LayerDescriptor::Strong,
                LayerDescriptor::Adequate,
                LayerDescriptor::NeedsWork,
                LayerDescriptor::Strong
            ]
        );
    }

    #[test]
    fn evaluation_with_bad_band_fails_validation() {
        let err = decode_strict::<Evaluation>(
            r#"{"capability_summary":"x","confidence_band":"Very high","rationale":"r",
                "layer1_descriptor":"Strong","layer2_descriptor":"Strong",
                "layer3_descriptor":"Strong","layer4_descriptor":"Strong"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AiError::Validation(_)));
    }
}
