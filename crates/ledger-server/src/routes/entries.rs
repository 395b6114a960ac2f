use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use ledger_core::requests::{CreateEntryRequest, SaveIntentRequest};
use ledger_core::responses::{CreateEntryResponse, SaveIntentResponse, TimelineResponse};

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;
use crate::workflow::{intake, timeline as timeline_flow};

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<Json<CreateEntryResponse>, ApiError> {
    let Json(req) = body?;
    Ok(Json(intake::create_entry(&state, user.id(), req).await?))
}

pub async fn timeline(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<TimelineResponse>, ApiError> {
    Ok(Json(timeline_flow::timeline(&state, user.id()).await?))
}

pub async fn save_intent(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<SaveIntentRequest>, JsonRejection>,
) -> Result<Json<SaveIntentResponse>, ApiError> {
    let Json(req) = body?;
    Ok(Json(intake::save_intent(&state, user.id(), req).await?))
}
