use std::sync::Arc;

use ledger_core::entities::AssessmentQuestion;

use crate::decode::{StagePayload, decode_strict};
use crate::error::AiError;
use crate::model::CompletionModel;
use crate::payloads::{Classification, Evaluation, GeneratedQuestions};
use crate::prompts::{PromptKind, PromptSet};
use crate::render;

/// Runs the three model stages: pairs each stage's instruction template
/// with its user message, calls the model and decodes the reply strictly.
#[derive(Clone)]
pub struct Assessor {
    model: Arc<dyn CompletionModel>,
    prompts: PromptSet,
}

impl Assessor {
    pub fn new(model: Arc<dyn CompletionModel>, prompts: PromptSet) -> Self {
        Self { model, prompts }
    }

    /// # Errors
    ///
    /// Returns an [`AiError`] if the call fails or the reply is unusable.
    pub async fn classify(&self, digest: &str) -> Result<Classification, AiError> {
        self.run(PromptKind::DomainClassifier, &render::classification_prompt(digest))
            .await
    }

    /// # Errors
    ///
    /// Returns an [`AiError`] if the call fails or the reply lacks any of
    /// the four questions.
    pub async fn generate_questions(
        &self,
        digest: &str,
        domain: &str,
        intent: Option<&str>,
    ) -> Result<GeneratedQuestions, AiError> {
        self.run(
            PromptKind::QuestionGenerator,
            &render::questions_prompt(digest, domain, intent),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`AiError`] if the call fails or the reply is unusable.
    pub async fn evaluate(
        &self,
        digest: &str,
        domain: Option<&str>,
        questions: &[AssessmentQuestion],
        answers: &[String; 4],
    ) -> Result<Evaluation, AiError> {
        self.run(
            PromptKind::AnswerEvaluator,
            &render::evaluation_prompt(digest, domain, questions, answers),
        )
        .await
    }

    async fn run<T: StagePayload>(&self, kind: PromptKind, user: &str) -> Result<T, AiError> {
        tracing::debug!(stage = %kind, prompt_chars = user.chars().count(), "calling model");
        let raw = self.model.complete(self.prompts.get(kind), user).await?;
        decode_strict(&raw).inspect_err(|e| {
            tracing::warn!(stage = %kind, error = %e, "model reply rejected");
        })
    }
}
