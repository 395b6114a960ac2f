//! Instruction templates for each model stage.
//!
//! The built-in templates are compiled in. A prompt directory, when
//! configured, may override any of them with a `{name}.txt` file; templates
//! missing from the directory fall back to the built-in text.

use std::fmt;
use std::path::Path;

use crate::error::AiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    DomainClassifier,
    QuestionGenerator,
    AnswerEvaluator,
}

impl PromptKind {
    pub const ALL: [Self; 3] = [
        Self::DomainClassifier,
        Self::QuestionGenerator,
        Self::AnswerEvaluator,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DomainClassifier => "domain_classifier",
            Self::QuestionGenerator => "question_generator",
            Self::AnswerEvaluator => "answer_evaluator",
        }
    }

    const fn builtin(self) -> &'static str {
        match self {
            Self::DomainClassifier => include_str!("../prompts/domain_classifier.txt"),
            Self::QuestionGenerator => include_str!("../prompts/question_generator.txt"),
            Self::AnswerEvaluator => include_str!("../prompts/answer_evaluator.txt"),
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three instruction texts, loaded once at startup.
#[derive(Debug, Clone)]
pub struct PromptSet {
    domain_classifier: String,
    question_generator: String,
    answer_evaluator: String,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PromptSet {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            domain_classifier: PromptKind::DomainClassifier.builtin().to_string(),
            question_generator: PromptKind::QuestionGenerator.builtin().to_string(),
            answer_evaluator: PromptKind::AnswerEvaluator.builtin().to_string(),
        }
    }

    /// Load templates, letting files in `dir` override the built-in ones.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Prompt`] if `dir` is not a directory, or an
    /// override file exists but cannot be read or is blank.
    pub fn load(dir: Option<&Path>) -> Result<Self, AiError> {
        let mut set = Self::builtin();
        let Some(dir) = dir else {
            return Ok(set);
        };
        if !dir.is_dir() {
            return Err(AiError::Prompt(format!(
                "prompt directory {} does not exist",
                dir.display()
            )));
        }

        for kind in PromptKind::ALL {
            let path = dir.join(format!("{kind}.txt"));
            if !path.exists() {
                continue;
            }
            let text = std::fs::read_to_string(&path)
                .map_err(|e| AiError::Prompt(format!("{}: {e}", path.display())))?;
            if text.trim().is_empty() {
                return Err(AiError::Prompt(format!("{} is empty", path.display())));
            }
            tracing::info!(prompt = %kind, path = %path.display(), "using prompt override");
            *set.slot_mut(kind) = text;
        }
        Ok(set)
    }

    #[must_use]
    pub fn get(&self, kind: PromptKind) -> &str {
        match kind {
            PromptKind::DomainClassifier => &self.domain_classifier,
            PromptKind::QuestionGenerator => &self.question_generator,
            PromptKind::AnswerEvaluator => &self.answer_evaluator,
        }
    }

    fn slot_mut(&mut self, kind: PromptKind) -> &mut String {
        match kind {
            PromptKind::DomainClassifier => &mut self.domain_classifier,
            PromptKind::QuestionGenerator => &mut self.question_generator,
            PromptKind::AnswerEvaluator => &mut self.answer_evaluator,
        }
    }
}
