//! Uploaded-document storage — staging and retrieval of doctor credential
//! files under the configured uploads directory.
//!
//! Stored names keep the legacy service's shape, `<unix-millis>-<original>`,
//! so references written by it stay readable.

use std::path::{Path, PathBuf};

use chrono::Utc;

/// Directory-safe version of a client-supplied filename.
pub fn sanitize_filename(name: &str) -> String {
    // Remove path separators and null bytes, replace other special chars
    let sanitized: String = name
        .chars()
        .filter(|&c| c != '/' && c != '\\' && c != '\0')
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    // Remove consecutive dots (path traversal prevention)
    let sanitized = sanitized.replace("..", "");

    // Truncate to 100 characters
    let sanitized: String = sanitized.chars().take(100).collect();

    if sanitized.is_empty() {
        "document".into()
    } else {
        sanitized
    }
}

/// Stored name for a new upload: unix-millis prefix, then the sanitized
/// original name.
pub fn stored_filename(original: &str) -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), sanitize_filename(original))
}

/// Write an uploaded document into `uploads_dir` and return its stored name.
pub async fn stage_document(
    uploads_dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> std::io::Result<String> {
    tokio::fs::create_dir_all(uploads_dir).await?;

    let name = stored_filename(original_name);
    tokio::fs::write(uploads_dir.join(&name), bytes).await?;
    tracing::info!(file = %name, size = bytes.len(), "Upload stored");
    Ok(name)
}

/// Resolve a requested upload name to a real file inside `uploads_dir`.
///
/// Only bare names are served: separators, NUL, and `..` are rejected before
/// touching the filesystem, and the canonicalized result must stay inside
/// the uploads directory.
pub fn resolve_upload(uploads_dir: &Path, name: &str) -> Option<PathBuf> {
    if name.is_empty()
        || name.contains("..")
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0')
    {
        return None;
    }

    let path = uploads_dir.join(name);
    let canonical = path.canonicalize().ok()?;
    let dir_canonical = uploads_dir.canonicalize().ok()?;
    if !canonical.starts_with(&dir_canonical) {
        return None;
    }

    canonical.is_file().then_some(canonical)
}
