//! Validation rules for evidence intake.
//!
//! Every check here runs before any ownership lookup, storage write or
//! transcript fetch.

use url::Url;

use crate::errors::CoreError;

/// Upper bound on a single uploaded file (25 MiB).
pub const MAX_FILE_SIZE: u64 = 25 * 1024 * 1024;

/// Content types accepted for file evidence.
pub const ALLOWED_MIME_TYPES: [&str; 12] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "text/plain",
    "text/markdown",
    "image/png",
    "image/jpeg",
    "image/webp",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// Content type assumed when the client sends none.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Reduce a `Content-Type` header value to its lowercase essence
/// (`text/plain; charset=utf-8` becomes `text/plain`).
#[must_use]
pub fn mime_essence(content_type: Option<&str>) -> String {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .filter(|ct| !ct.is_empty())
        .map_or_else(|| FALLBACK_MIME_TYPE.to_string(), str::to_ascii_lowercase)
}

#[must_use]
pub fn is_allowed_mime(mime: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime)
}

/// Check an upload's size and content type against the intake limits.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] for an empty file, a file over
/// `max_bytes` or a content type outside [`ALLOWED_MIME_TYPES`].
pub fn check_upload(size: u64, mime: &str, max_bytes: u64) -> Result<(), CoreError> {
    if size == 0 {
        return Err(CoreError::validation("file is required"));
    }
    if size > max_bytes {
        return Err(file_too_large(max_bytes));
    }
    if !is_allowed_mime(mime) {
        return Err(CoreError::validation("File type not allowed"));
    }
    Ok(())
}

/// The error reported for a file over `max_bytes`, whether caught by the
/// size check or by the request body limit.
#[must_use]
pub fn file_too_large(max_bytes: u64) -> CoreError {
    CoreError::validation(format!("File too large (max {} MB)", max_bytes / (1024 * 1024)))
}

/// Extension of `filename` including the leading dot, lowercased.
///
/// Returns an empty string when there is no usable extension. Anything that
/// is not plain ASCII alphanumerics is dropped so client-supplied names can
/// never inject path separators into a storage key.
#[must_use]
pub fn file_extension(filename: &str) -> String {
    let Some((stem, ext)) = filename.rsplit_once('.') else {
        return String::new();
    };
    if stem.is_empty() && !filename.starts_with('.') {
        return String::new();
    }
    if ext.is_empty() || ext.len() > 16 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return String::new();
    }
    format!(".{}", ext.to_ascii_lowercase())
}

/// Object key for an uploaded file: `{user_id}/{entry_id}/{object_id}{ext}`.
#[must_use]
pub fn storage_path(user_id: &str, entry_id: &str, object_id: &str, filename: &str) -> String {
    format!("{user_id}/{entry_id}/{object_id}{}", file_extension(filename))
}

/// Validate a link evidence URL. Only `http` and `https` are accepted.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the value does not parse as an
/// absolute http(s) URL.
pub fn validate_link(raw: &str) -> Result<Url, CoreError> {
    let url = Url::parse(raw.trim()).map_err(|_| CoreError::validation("content must be a valid URL"))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(CoreError::validation("content must be a valid URL")),
    }
}
