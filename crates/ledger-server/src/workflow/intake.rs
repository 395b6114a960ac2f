//! Entry creation and evidence intake.

use axum::body::Bytes;
use ledger_core::entities::FileMetadata;
use ledger_core::enums::EvidenceType;
use ledger_core::evidence_rules::{check_upload, mime_essence, storage_path};
use ledger_core::ids::{new_id, parse_uuid};
use ledger_core::requests::{AddEvidenceRequest, CreateEntryRequest, EvidenceQuery, SaveIntentRequest};
use ledger_core::responses::{
    AddEvidenceResponse, CreateEntryResponse, EvidenceListResponse, SaveIntentResponse,
    SignedUrlResponse,
};
use ledger_db::NewEvidence;
use ledger_db::error::DatabaseError;
use ledger_transcript::fetch_best_effort;

use crate::error::ApiError;
use crate::ownership::owned_entry;
use crate::state::AppState;

/// Name recorded for uploads that arrive without a filename.
const UNNAMED_UPLOAD: &str = "upload";

pub async fn create_entry(
    state: &AppState,
    user_id: &str,
    req: CreateEntryRequest,
) -> Result<CreateEntryResponse, ApiError> {
    req.validate()?;
    let description = req
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    let entry = state
        .db
        .create_entry(user_id, req.title.trim(), description)
        .await?;
    tracing::info!(entry_id = %entry.id, user_id, "entry created");
    Ok(CreateEntryResponse {
        entry_id: entry.id,
        created_at: entry.created_at,
    })
}

pub async fn save_intent(
    state: &AppState,
    user_id: &str,
    req: SaveIntentRequest,
) -> Result<SaveIntentResponse, ApiError> {
    let entry_id = req.validate()?;
    owned_entry(&state.db, &entry_id, user_id).await?;
    state.db.save_intent(&entry_id, &req.intent_prompt).await?;
    Ok(SaveIntentResponse { success: true })
}

/// Record text or link evidence. Video links get a transcript when one can
/// be fetched.
pub async fn add_evidence(
    state: &AppState,
    user_id: &str,
    req: AddEvidenceRequest,
) -> Result<AddEvidenceResponse, ApiError> {
    let entry_id = req.validate()?;
    owned_entry(&state.db, &entry_id, user_id).await?;

    let content = req.content.trim();
    let transcript = if req.evidence_type == EvidenceType::Link {
        fetch_best_effort(state.transcripts.as_ref(), content).await
    } else {
        None
    };

    let evidence = state
        .db
        .add_evidence(
            &entry_id,
            NewEvidence {
                evidence_type: req.evidence_type,
                content,
                transcript: transcript.as_deref(),
            },
        )
        .await?;
    tracing::info!(
        entry_id = %entry_id,
        evidence_id = %evidence.id,
        kind = %evidence.evidence_type,
        transcript = transcript.is_some(),
        "evidence added"
    );
    Ok(AddEvidenceResponse {
        evidence_id: evidence.id,
        created_at: evidence.created_at,
    })
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// Whether a file may be stored for an entry without a prior file row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// Create the entry's file row, or overwrite it if one exists.
    Upload,
    /// Overwrite the existing file row; fails if there is none.
    Replace,
}

/// A file read from a multipart request.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub entry_id: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Store an uploaded file and point the entry's file evidence at it.
///
/// Size and type are checked before the ownership lookup; nothing is written
/// unless every check passes. The previous object, if any, is left in place.
pub async fn store_file(
    state: &AppState,
    user_id: &str,
    upload: FileUpload,
    mode: FileMode,
) -> Result<AddEvidenceResponse, ApiError> {
    let entry_id = parse_uuid("entry_id", &upload.entry_id)?;
    let mime = mime_essence(upload.content_type.as_deref());
    let size = upload.bytes.len() as u64;
    check_upload(size, &mime, state.limits.max_upload_bytes)?;

    owned_entry(&state.db, &entry_id, user_id).await?;
    let existing = state.db.current_file_evidence(&entry_id).await?;
    if mode == FileMode::Replace && existing.is_none() {
        return Err(ApiError::not_found("No existing file evidence to replace"));
    }

    let filename = upload
        .filename
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNNAMED_UPLOAD)
        .to_string();
    let key = storage_path(user_id, &entry_id, &new_id(), &filename);
    state.storage.put_new(&key, upload.bytes, &mime).await?;

    let file = FileMetadata {
        storage_path: key,
        original_filename: filename,
        mime_type: mime,
        size,
    };
    let evidence = match existing {
        Some(current) => state.db.replace_file_evidence(&current.id, &file).await?,
        None => match state.db.insert_file_evidence(&entry_id, &file).await {
            Ok(evidence) => evidence,
            // A concurrent upload created the row first; overwrite it instead.
            Err(DatabaseError::Conflict(_)) => {
                let current = state
                    .db
                    .current_file_evidence(&entry_id)
                    .await?
                    .ok_or(DatabaseError::NoResult)?;
                state.db.replace_file_evidence(&current.id, &file).await?
            }
            Err(e) => return Err(e.into()),
        },
    };

    tracing::info!(
        entry_id = %entry_id,
        evidence_id = %evidence.id,
        storage_path = %file.storage_path,
        size,
        ?mode,
        "file evidence stored"
    );
    Ok(AddEvidenceResponse {
        evidence_id: evidence.id,
        created_at: evidence.created_at,
    })
}

pub async fn list_evidence(
    state: &AppState,
    user_id: &str,
    query: EvidenceQuery,
) -> Result<EvidenceListResponse, ApiError> {
    let entry_id = parse_uuid("entry_id", query.entry_id.as_deref().unwrap_or_default())?;
    owned_entry(&state.db, &entry_id, user_id).await?;
    let evidence = state.db.list_evidence(&entry_id).await?;
    Ok(EvidenceListResponse { evidence })
}

/// Short-lived download link for a stored file.
pub async fn signed_url(
    state: &AppState,
    user_id: &str,
    evidence_id: &str,
) -> Result<SignedUrlResponse, ApiError> {
    let evidence_id = parse_uuid("evidence_id", evidence_id)?;
    let evidence = match state.db.get_evidence(&evidence_id).await {
        Ok(evidence) => evidence,
        Err(DatabaseError::NoResult) => return Err(ApiError::not_found("Evidence not found")),
        Err(e) => return Err(e.into()),
    };
    owned_entry(&state.db, &evidence.entry_id, user_id).await?;

    let path = evidence
        .storage_path
        .as_deref()
        .filter(|_| evidence.evidence_type == EvidenceType::File)
        .ok_or_else(|| ApiError::not_found("Evidence has no stored file"))?;
    let signed = state.storage.signed_download_url(path).await?;
    Ok(SignedUrlResponse {
        url: signed.url.to_string(),
        expires_at: signed.expires_at,
    })
}
