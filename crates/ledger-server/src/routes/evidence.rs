use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Multipart, Path, Query, State};
use ledger_core::requests::{AddEvidenceRequest, EvidenceQuery};
use ledger_core::responses::{AddEvidenceResponse, EvidenceListResponse, SignedUrlResponse};

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;
use crate::workflow::intake::{self, FileMode, FileUpload};

pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<EvidenceQuery>, QueryRejection>,
) -> Result<Json<EvidenceListResponse>, ApiError> {
    let Query(query) = query?;
    Ok(Json(intake::list_evidence(&state, user.id(), query).await?))
}

pub async fn add(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<AddEvidenceRequest>, JsonRejection>,
) -> Result<Json<AddEvidenceResponse>, ApiError> {
    let Json(req) = body?;
    Ok(Json(intake::add_evidence(&state, user.id(), req).await?))
}

pub async fn upload(
    State(state): State<AppState>,
    user: CurrentUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AddEvidenceResponse>, ApiError> {
    let upload = read_upload(multipart, state.limits.max_upload_bytes).await?;
    Ok(Json(
        intake::store_file(&state, user.id(), upload, FileMode::Upload).await?,
    ))
}

pub async fn replace(
    State(state): State<AppState>,
    user: CurrentUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AddEvidenceResponse>, ApiError> {
    let upload = read_upload(multipart, state.limits.max_upload_bytes).await?;
    Ok(Json(
        intake::store_file(&state, user.id(), upload, FileMode::Replace).await?,
    ))
}

pub async fn signed_url(
    State(state): State<AppState>,
    user: CurrentUser,
    evidence_id: Result<Path<String>, PathRejection>,
) -> Result<Json<SignedUrlResponse>, ApiError> {
    let Path(evidence_id) = evidence_id?;
    Ok(Json(intake::signed_url(&state, user.id(), &evidence_id).await?))
}

/// Pull the `entry_id` and `file` fields out of a multipart body. Other
/// fields are ignored.
async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
    max_upload_bytes: u64,
) -> Result<FileUpload, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::validation(e.body_text()))?;
    let mut entry_id = String::new();
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::from_multipart(&e, max_upload_bytes))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("entry_id") => {
                entry_id = field
                    .text()
                    .await
                    .map_err(|e| ApiError::from_multipart(&e, max_upload_bytes))?;
            }
            Some("file") => {
                let filename = field.file_name().map(str::to_owned);
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::from_multipart(&e, max_upload_bytes))?;
                file = Some((filename, content_type, bytes));
            }
            _ => {}
        }
    }

    let (filename, content_type, bytes) = file.ok_or_else(|| ApiError::validation("file is required"))?;
    Ok(FileUpload {
        entry_id,
        filename,
        content_type,
        bytes,
    })
}
