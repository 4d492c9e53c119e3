use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::FetchError;
use crate::fetch::PageFetcher;

/// Builds the HTTP client shared by page and robots retrieval
pub fn build_client(user_agent: &str) -> Result<Client, FetchError> {
    Client::builder()
        .gzip(true)
        .brotli(true)
        .user_agent(user_agent)
        .build()
        .map_err(|e| FetchError::Other(format!("Failed to build HTTP client: {}", e)))
}

/// Page fetcher issuing a single GET per call
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn classify(url: &str, source: reqwest::Error) -> FetchError {
    if source.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source,
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        ::log::debug!("GET {} (timeout {:?})", url, timeout);

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                classify(url, e)
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
