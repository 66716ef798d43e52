use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub async fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", dir.display()))
}

/// Writes the fetched document to `path` byte for byte, replacing any
/// previous contents.
pub async fn save_document(path: &Path, content: &[u8]) -> Result<()> {
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
