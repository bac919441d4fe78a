use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use uuid::Uuid;

/// Reduces a client-supplied filename to a safe basename: the last path
/// component, with anything outside `[A-Za-z0-9._-]` replaced by `_` and
/// leading dots removed.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    match cleaned.trim_start_matches('.') {
        "" => "upload".to_string(),
        name => name.to_string(),
    }
}

/// Writes the upload into the staging directory as `<uuid>-<sanitized name>`.
pub async fn stage_upload(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create upload directory: {}", dir.display()))?;

    let path = dir.join(format!("{}-{}", Uuid::new_v4(), sanitize_filename(filename)));
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to stage upload: {}", path.display()))?;

    debug!(path = %path.display(), bytes = bytes.len(), "Upload staged");
    Ok(path)
}
