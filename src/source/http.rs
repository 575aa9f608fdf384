//! HTTP implementation of [`Source`]

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::FETCH_TIMEOUT_MS;
use crate::release::error::SourceError;
use crate::source::Source;

/// Fetches feed documents over HTTP(S). No retries: a failed request fails the fetch.
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("release-matrix")
                .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Source for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        debug!("Fetching release feed: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Release feed returned status {}: {}", status, url);
            return Err(SourceError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}
