use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A generated question. At most one per `(entry_id, question_number)`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssessmentQuestion {
    pub entry_id: String,
    pub question_number: u8,
    pub question_text: String,
    pub created_at: DateTime<Utc>,
}

/// A user's answer to one question. Resubmission overwrites in place.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssessmentAnswer {
    pub entry_id: String,
    pub question_number: u8,
    pub answer_text: String,
    pub updated_at: DateTime<Utc>,
}
