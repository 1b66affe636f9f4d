// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::{AppError, Result};
use crate::models::CrawlerConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &CrawlerConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page body as text.
///
/// Non-success statuses and empty bodies are reported as fetch errors.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::fetch(url, e))?;
    let response = response
        .error_for_status()
        .map_err(|e| AppError::fetch(url, e))?;
    let body = response.text().await.map_err(|e| AppError::fetch(url, e))?;

    if body.trim().is_empty() {
        return Err(AppError::fetch(url, "empty response body"));
    }

    log::debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
