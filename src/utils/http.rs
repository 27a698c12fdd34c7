// src/utils/http.rs

//! HTTP client utilities.
//!
//! `fetch` is the single point where the network touches this crate:
//! every failure mode (DNS, connect, timeout, non-success status, body
//! decode) collapses to `None` so that callers only ever see
//! "reachable body" or "unreachable".

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::FetcherConfig;

/// Page fetch abstraction.
///
/// The resolver goes through this trait so tests can substitute canned
/// responses and record which URLs were requested.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch a URL, returning the body or `None` when unreachable.
    async fn get(&self, url: &str) -> Option<String>;
}

/// `Fetch` implementation backed by a configured `reqwest::Client`.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the configured user agent and timeout.
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Option<String> {
        // An empty URL is a source-implementation defect, not a runtime case.
        debug_assert!(!url.is_empty(), "fetch called with empty URL");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::debug!("Fetch failed for {url}: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            log::debug!("Fetch got status {} for {url}", response.status());
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                log::debug!("Body read failed for {url}: {e}");
                None
            }
        }
    }
}
