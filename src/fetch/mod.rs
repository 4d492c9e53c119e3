pub mod http;

use crate::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

pub use http::HttpFetcher;

/// Retrieves the raw markup of a page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` with a single GET, failing on transport errors, timeouts
    /// and any non-success status.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}
