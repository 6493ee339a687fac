use crate::config::ScraperConfig;
use anyhow::{Context, Result, bail};
use std::time::Duration;
use tracing::debug;

/// Thin wrapper over `reqwest::Client` with the configured timeout and
/// user agent. One attempt per request.
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            // Accept cookies so session-based pages work
            .cookie_store(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { inner })
    }

    /// Fetch a URL as text. Non-2xx responses are errors.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let resp = self
            .inner
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = resp.status();
        if !status.is_success() {
            bail!("HTTP error {} for {}", status, url);
        }

        resp.text().await.context("Failed to read response body")
    }
}
