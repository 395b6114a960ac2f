//! # ledger-ai
//!
//! Model-side half of the assessment workflow for Lighthouse Ledger.
//!
//! - [`CompletionModel`]: the single capability the workflow needs from a
//!   language model (instruction text + user text in, raw text out)
//! - [`OpenAiClient`]: OpenAI-compatible implementation over `reqwest`
//! - [`decode_strict`]: fence stripping and fail-closed JSON decoding
//! - [`PromptSet`]: built-in instruction templates with directory overrides
//! - [`render`]: evidence digests and per-stage user messages
//! - [`Assessor`]: classification, question generation and answer evaluation

mod assessor;
mod decode;
mod error;
mod http;
mod model;
mod openai;
mod payloads;
mod prompts;
pub mod render;

pub use assessor::Assessor;
pub use decode::{StagePayload, decode_strict, strip_code_fence};
pub use error::AiError;
pub use model::CompletionModel;
pub use openai::OpenAiClient;
pub use payloads::{Classification, Evaluation, GeneratedQuestions};
pub use prompts::{PromptKind, PromptSet};
