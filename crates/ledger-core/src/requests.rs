//! Request bodies accepted by the HTTP surface.
//!
//! Structural validation (required strings present and non-blank, answer
//! numbering) lives on the types so handlers can reject bad input before any
//! lookup or external call.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EvidenceType;
use crate::errors::CoreError;
use crate::ids::parse_uuid;

fn required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateEntryRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateEntryRequest {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        required("title", &self.title)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AddEvidenceRequest {
    pub entry_id: String,
    pub evidence_type: EvidenceType,
    pub content: String,
}

impl AddEvidenceRequest {
    /// Validate and return the canonical entry id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a bad entry id, blank content,
    /// `file` evidence (which must be uploaded) or a malformed link.
    pub fn validate(&self) -> Result<String, CoreError> {
        let entry_id = parse_uuid("entry_id", &self.entry_id)?;
        required("content", &self.content)?;
        match self.evidence_type {
            EvidenceType::Text => {}
            EvidenceType::Link => {
                crate::evidence_rules::validate_link(&self.content)?;
            }
            EvidenceType::File => {
                return Err(CoreError::validation(
                    "file evidence must be uploaded via /api/evidence/upload",
                ));
            }
        }
        Ok(entry_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SaveIntentRequest {
    pub entry_id: String,
    pub intent_prompt: String,
}

impl SaveIntentRequest {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a bad entry id or blank intent.
    pub fn validate(&self) -> Result<String, CoreError> {
        let entry_id = parse_uuid("entry_id", &self.entry_id)?;
        required("intent_prompt", &self.intent_prompt)?;
        Ok(entry_id)
    }
}

/// Body of the classify and generate-questions stages.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntryRef {
    pub entry_id: String,
}

impl EntryRef {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a bad entry id.
    pub fn validate(&self) -> Result<String, CoreError> {
        parse_uuid("entry_id", &self.entry_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnswerSubmission {
    #[serde(rename = "questionNumber")]
    pub question_number: u8,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EvaluateAnswersRequest {
    pub entry_id: String,
    pub answers: Vec<AnswerSubmission>,
}

impl EvaluateAnswersRequest {
    /// Validate and return the canonical entry id plus the answers ordered
    /// by question number.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] unless there are exactly four
    /// non-blank answers numbered 1 through 4 with no duplicates.
    pub fn validate(&self) -> Result<(String, [String; 4]), CoreError> {
        let entry_id = parse_uuid("entry_id", &self.entry_id)?;
        if self.answers.len() != 4 {
            return Err(CoreError::validation("Exactly 4 answers are required"));
        }

        let mut seen = BTreeSet::new();
        let mut ordered: [String; 4] = Default::default();
        for submission in &self.answers {
            let n = submission.question_number;
            if !(1..=4).contains(&n) {
                return Err(CoreError::validation("questionNumber must be between 1 and 4"));
            }
            if !seen.insert(n) {
                return Err(CoreError::validation(format!("Duplicate answer for question {n}")));
            }
            if submission.answer.trim().is_empty() {
                return Err(CoreError::validation(format!("Answer {n} is required")));
            }
            ordered[usize::from(n - 1)].clone_from(&submission.answer);
        }
        Ok((entry_id, ordered))
    }
}

/// Query string of the evidence list route.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EvidenceQuery {
    pub entry_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ENTRY: &str = "0b8f2c1e-5a55-4b8e-9d0a-7f4c2f2f9e11";

    fn answers(numbers: &[u8]) -> Vec<AnswerSubmission> {
        numbers
            .iter()
            .map(|&n| AnswerSubmission {
                question_number: n,
                answer: format!("answer {n}"),
            })
            .collect()
    }

    #[test]
    fn evaluate_orders_answers_by_number() {
        let req = EvaluateAnswersRequest {
            entry_id: ENTRY.into(),
            answers: answers(&[3, 1, 4, 2]),
        };
        let (_, ordered) = req.validate().unwrap();
        assert_eq!(ordered[0], "answer 1");
        assert_eq!(ordered[3], "answer 4");
    }

    #[test]
    fn evaluate_rejects_three_answers() {
        let req = EvaluateAnswersRequest {
            entry_id: ENTRY.into(),
            answers: answers(&[1, 2, 3]),
        };
        assert!(matches!(req.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn evaluate_rejects_duplicates_and_out_of_range() {
        let dup = EvaluateAnswersRequest {
            entry_id: ENTRY.into(),
            answers: answers(&[1, 2, 2, 4]),
        };
        assert!(dup.validate().is_err());
        let range = EvaluateAnswersRequest {
            entry_id: ENTRY.into(),
            answers: answers(&[0, 1, 2, 3]),
        };
        assert!(range.validate().is_err());
    }

    #[test]
    fn evaluate_rejects_blank_answer() {
        let mut list = answers(&[1, 2, 3, 4]);
        list[2].answer = "   ".into();
        let req = EvaluateAnswersRequest {
            entry_id: ENTRY.into(),
            answers: list,
        };
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "Answer 3 is required");
    }

    #[test]
    fn answer_number_uses_camel_case_key() {
        let parsed: AnswerSubmission =
            serde_json::from_str(r#"{"questionNumber": 2, "answer": "x"}"#).unwrap();
        assert_eq!(parsed.question_number, 2);
    }

    #[test]
    fn file_evidence_is_not_accepted_as_json() {
        let req = AddEvidenceRequest {
            entry_id: ENTRY.into(),
            evidence_type: EvidenceType::File,
            content: "report.pdf".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn link_evidence_must_be_a_url() {
        let req = AddEvidenceRequest {
            entry_id: ENTRY.into(),
            evidence_type: EvidenceType::Link,
            content: "just words".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn blank_title_is_rejected() {
        let req = CreateEntryRequest {
            title: "  ".into(),
            description: None,
        };
        assert_eq!(req.validate().unwrap_err().to_string(), "title is required");
    }
}
