use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use ledger_core::responses::PublicVerification;

use crate::error::ApiError;
use crate::state::AppState;
use crate::workflow::timeline;

/// Unauthenticated; never resolves the caller.
pub async fn lookup(
    State(state): State<AppState>,
    public_id: Result<Path<String>, PathRejection>,
) -> Result<Json<PublicVerification>, ApiError> {
    let Path(public_id) = public_id?;
    Ok(Json(timeline::public_verification(&state, &public_id).await?))
}
