use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

/// Downloads `url` and returns the whole response body.
///
/// The request is bounded by `timeout` end to end. Transport failures and
/// non-success statuses are both reported as a plain error carrying the URL.
pub async fn fetch_page(url: &str, timeout: Duration, user_agent: &str) -> Result<Vec<u8>> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .context("Failed to build HTTP client")?;

    debug!(url, timeout_secs = timeout.as_secs(), "sending request");

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .with_context(|| format!("Failed to fetch {}", url))?;

    let body = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;

    Ok(body.to_vec())
}
