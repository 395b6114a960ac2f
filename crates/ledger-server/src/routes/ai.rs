use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use ledger_ai::{Classification, GeneratedQuestions};
use ledger_core::requests::{EntryRef, EvaluateAnswersRequest};
use ledger_core::responses::EvaluateAnswersResponse;

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;
use crate::workflow::{classify, evaluate as evaluate_flow, questions as questions_flow};

pub async fn analyze(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<EntryRef>, JsonRejection>,
) -> Result<Json<Classification>, ApiError> {
    let Json(req) = body?;
    Ok(Json(classify::classify(&state, user.id(), req).await?))
}

pub async fn questions(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<EntryRef>, JsonRejection>,
) -> Result<Json<GeneratedQuestions>, ApiError> {
    let Json(req) = body?;
    Ok(Json(questions_flow::generate(&state, user.id(), req).await?))
}

pub async fn evaluate(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<EvaluateAnswersRequest>, JsonRejection>,
) -> Result<Json<EvaluateAnswersResponse>, ApiError> {
    let Json(req) = body?;
    Ok(Json(evaluate_flow::evaluate(&state, user.id(), req).await?))
}
