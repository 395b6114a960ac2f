//! User-message builders for the three model stages.

use ledger_core::entities::{AssessmentQuestion, Evidence};
use ledger_core::text::truncate_chars;

/// Shown in place of the evidence digest when an entry has none.
pub const NO_EVIDENCE: &str = "No evidence";

/// Render each evidence item as `{type}: {content}` and join them with
/// newlines.
///
/// `budget` bounds the content of every item in characters. A link's
/// transcript, when present, is appended on its own line under the same
/// budget.
#[must_use]
pub fn evidence_digest(evidence: &[Evidence], budget: usize) -> String {
    let lines: Vec<String> = evidence
        .iter()
        .map(|ev| {
            let mut line = format!("{}: {}", ev.evidence_type, truncate_chars(&ev.content, budget));
            if let Some(transcript) = ev.transcript.as_deref().filter(|t| !t.trim().is_empty()) {
                line.push_str("\nTranscript: ");
                line.push_str(truncate_chars(transcript, budget));
            }
            line
        })
        .collect();
    if lines.is_empty() {
        NO_EVIDENCE.to_string()
    } else {
        lines.join("\n")
    }
}

#[must_use]
pub fn classification_prompt(digest: &str) -> String {
    format!("Evidence to analyze:\n\n{digest}")
}

#[must_use]
pub fn questions_prompt(digest: &str, domain: &str, intent: Option<&str>) -> String {
    let intent = intent.filter(|i| !i.trim().is_empty()).unwrap_or("Not provided");
    format!("Learning evidence:\n{digest}\n\nPrimary domain: {domain}\nIntent: {intent}")
}

/// `questions` need not be sorted; the answer for question `n` is
/// `answers[n - 1]`.
#[must_use]
pub fn evaluation_prompt(
    digest: &str,
    domain: Option<&str>,
    questions: &[AssessmentQuestion],
    answers: &[String; 4],
) -> String {
    let domain = domain.filter(|d| !d.trim().is_empty()).unwrap_or("Unknown");
    let qa_pairs = answers
        .iter()
        .zip(1u8..)
        .map(|(answer, number)| {
            let question = questions
                .iter()
                .find(|q| q.question_number == number)
                .map_or("Unknown", |q| q.question_text.as_str());
            format!("Question {number}: {question}\nAnswer: {answer}")
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("Original evidence:\n{digest}\n\nDomain: {domain}\n\nQuestions and answers:\n{qa_pairs}")
}
