use ledger_core::ids::PUBLIC_ID_LEN;
use ledger_core::responses::{PublicVerification, TimelineResponse};
use ledger_db::error::DatabaseError;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn timeline(state: &AppState, user_id: &str) -> Result<TimelineResponse, ApiError> {
    let entries = state.db.timeline(user_id, state.limits.summary_chars).await?;
    Ok(TimelineResponse { entries })
}

/// Anonymous lookup of a published verification.
pub async fn public_verification(
    state: &AppState,
    public_id: &str,
) -> Result<PublicVerification, ApiError> {
    let not_found = || ApiError::not_found("Verification not found");
    let well_formed =
        public_id.len() == PUBLIC_ID_LEN && public_id.bytes().all(|b| b.is_ascii_hexdigit());
    if !well_formed {
        return Err(not_found());
    }
    match state.db.get_verification_by_public_id(public_id).await {
        Ok(verification) => Ok(verification.into()),
        Err(DatabaseError::NoResult) => Err(not_found()),
        Err(e) => Err(e.into()),
    }
}
