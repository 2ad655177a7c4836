//! HTTP fetch seam.
//!
//! The resolver talks to upstream through the [`Fetch`] trait so tests can
//! drive the pipeline with canned pages. [`HttpFetcher`] is the real
//! implementation: reqwest with rustls, per-request timeouts, and a fixed
//! browser User-Agent — calend.ru rejects default client identifiers.

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use std::time::Duration;
use tracing::debug;

use crate::error::{HolidayError, Result};

/// Fixed identity sent with every request.
pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// Abstraction over outbound page fetches.
///
/// A non-2xx status is an error ([`HolidayError::Status`]); transport
/// failures map to [`HolidayError::Fetch`]. Implementations must be usable
/// from concurrent enrichment tasks.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch a URL and return the raw response body.
    async fn get_bytes(&self, url: &str, timeout: Duration) -> Result<Vec<u8>>;

    /// Fetch a URL and return the body as text. Invalid UTF-8 is replaced
    /// rather than rejected; upstream encodings are not reliable.
    async fn get_text(&self, url: &str, timeout: Duration) -> Result<String> {
        let bytes = self.get_bytes(url, timeout).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Real HTTP fetcher backed by a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get_bytes(&self, url: &str, timeout: Duration) -> Result<Vec<u8>> {
        debug!(%url, ?timeout, "fetching");
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| HolidayError::Fetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HolidayError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| HolidayError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(body.to_vec())
    }
}
