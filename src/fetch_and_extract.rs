use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::scraping::extract_meta::{extract_meta, MetadataRecord};
use crate::scraping::fetch_page::fetch_page;
use crate::utilities::decode_document::decode_document;
use crate::utilities::save_document::{ensure_output_dir, save_document};

/// Fetches `url`, stores the raw page and extracts its metadata.
///
/// The output directory is created first. If the fetch fails nothing is
/// written. Returns the path of the saved page alongside the record.
pub async fn fetch_and_extract(config: &AppConfig, url: &str) -> Result<(PathBuf, MetadataRecord)> {
    ensure_output_dir(Path::new(&config.file.output_dir)).await?;

    info!(url, "fetching page");
    let content = fetch_page(url, config.fetch.timeout(), &config.fetch.user_agent).await?;
    info!(bytes = content.len(), "page fetched");

    let output_path = config.file.output_path();
    save_document(&output_path, &content).await?;
    info!(path = %output_path.display(), "page saved");

    let html = decode_document(&content);
    let metadata = extract_meta(&html)?;
    info!(found = metadata.found_count(), "metadata extracted");

    Ok((output_path, metadata))
}
