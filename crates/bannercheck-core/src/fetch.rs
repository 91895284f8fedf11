//! Fetch adapter: the ONLY place that touches the network.
//!
//! Every method maps transport-level failure (DNS, timeout, connection
//! reset) and non-2xx status codes to an absence value. Nothing here raises
//! past this boundary, so rules never have to handle transport errors.
//! One outbound call per invocation; no caching, no retries — retry policy,
//! if any, belongs to the caller.

use async_trait::async_trait;
use reqwest::header::CONTENT_LENGTH;
use tracing::{debug, warn};

use crate::error::Result;

/// User agent sent on every outbound request.
pub const USER_AGENT: &str = concat!("bannercheck/", env!("CARGO_PKG_VERSION"));

/// Retrieval of a remote resource's text body and HEAD-derived metadata.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET; body text on 2xx, `None` on any non-success status or transport
    /// failure.
    async fn fetch_text(&self, url: &str) -> Option<String>;

    /// HEAD; true iff the response status is 2xx.
    async fn exists(&self, url: &str) -> bool;

    /// HEAD; parsed `Content-Length` on a 2xx response carrying the header,
    /// `None` if the header is missing, unparsable, or the request fails.
    async fn content_length(&self, url: &str) -> Option<u64>;
}

/// reqwest-backed [`Fetcher`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with its own HTTP client.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Build a fetcher over an existing client (connection reuse is up to
    /// the caller's client configuration).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn head(&self, url: &str) -> Option<reqwest::Response> {
        match self.client.head(url).send().await {
            Ok(response) => Some(response),
            Err(e) => {
                warn!(url, error = %e, "HEAD request failed");
                None
            }
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "GET request failed");
                return None;
            }
        };
        let status = response.status();
        if !status.is_success() {
            debug!(url, %status, "GET returned non-success");
            return None;
        }
        match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(url, error = %e, "failed to read response body");
                None
            }
        }
    }

    async fn exists(&self, url: &str) -> bool {
        let Some(response) = self.head(url).await else {
            return false;
        };
        let status = response.status();
        if !status.is_success() {
            debug!(url, %status, "HEAD returned non-success");
        }
        status.is_success()
    }

    async fn content_length(&self, url: &str) -> Option<u64> {
        let response = self.head(url).await?;
        let status = response.status();
        if !status.is_success() {
            debug!(url, %status, "HEAD returned non-success");
            return None;
        }
        let length = response
            .headers()
            .get(CONTENT_LENGTH)?
            .to_str()
            .ok()?
            .parse()
            .ok();
        if length.is_none() {
            debug!(url, "Content-Length header missing or unparsable");
        }
        length
    }
}

/// In-memory fetcher stub for rule unit tests.
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::{HashMap, HashSet};

    use async_trait::async_trait;

    use super::Fetcher;

    #[derive(Debug, Default)]
    pub(crate) struct StubFetcher {
        bodies: HashMap<String, String>,
        sizes: HashMap<String, u64>,
        existing: HashSet<String>,
    }

    impl StubFetcher {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_body(mut self, url: &str, body: &str) -> Self {
            self.bodies.insert(url.to_string(), body.to_string());
            self
        }

        pub(crate) fn with_size(mut self, url: &str, size: u64) -> Self {
            self.sizes.insert(url.to_string(), size);
            self
        }

        pub(crate) fn with_existing(mut self, url: &str) -> Self {
            self.existing.insert(url.to_string());
            self
        }
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch_text(&self, url: &str) -> Option<String> {
            self.bodies.get(url).cloned()
        }

        async fn exists(&self, url: &str) -> bool {
            self.existing.contains(url)
        }

        async fn content_length(&self, url: &str) -> Option<u64> {
            self.sizes.get(url).copied()
        }
    }
}
