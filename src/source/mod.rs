//! Sources of raw release feed text

pub mod http;

pub use http::HttpSource;

#[cfg(test)]
use mockall::automock;

use crate::release::error::SourceError;

/// Retrieves the text content of the resource identified by a URL
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError>;
}
