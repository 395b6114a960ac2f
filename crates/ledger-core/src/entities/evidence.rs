use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EvidenceType;

/// One artifact attached to an entry.
///
/// For `text` the content is the text itself, for `link` it is the URL and
/// for `file` it is the original filename. File metadata is only populated
/// for `file` evidence; `transcript` only for video links.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Evidence {
    pub id: String,
    pub entry_id: String,
    pub evidence_type: EvidenceType,
    pub content: String,
    pub storage_path: Option<String>,
    pub original_filename: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<u64>,
    pub transcript: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Stored-object metadata recorded for `file` evidence.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FileMetadata {
    pub storage_path: String,
    pub original_filename: String,
    pub mime_type: String,
    pub size: u64,
}
