//! HTTP client for Bing result pages
//!
//! Issues one GET per result page with a fixed per-request timeout and
//! a legacy handset `User-Agent`, which makes the server answer with the
//! simplified markup the link extractor understands.

use std::future::Future;
use std::time::Duration;

use reqwest::header::USER_AGENT;
use tracing::{debug, warn};

use crate::endpoint::{BASE_URL, build_search_url};
use crate::error::{BingError, Result};

/// Old Symbian browser identity; modern agents get script-heavy markup
pub const LEGACY_USER_AGENT: &str = "Nokia2700c/10.0.011 (SymbianOS/9.4; U; Series60/5.0 Opera/5.0; Profile/MIDP-2.1 Configuration/CLDC-1.1 ) AppleWebKit/525 (KHTML, like Gecko) Safari/525 3gpp-gba";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the search endpoint (default: https://www.bing.com)
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header (default: [`LEGACY_USER_AGENT`])
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 10,
            user_agent: LEGACY_USER_AGENT.to_string(),
        }
    }
}

/// Source of raw result pages
///
/// The pagination loop only needs the body of the page at a given
/// offset, so anything that can produce one (a live client, a canned
/// sequence in tests) can drive it.
pub trait PageSource {
    /// Fetch the raw body of the result page starting at `offset`
    fn fetch_page(&self, query: &str, offset: usize) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP client for the Bing search endpoint
///
/// No retries: any failure is returned to the caller as is.
pub struct BingClient {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl BingClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BingError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            user_agent: config.user_agent,
        })
    }

    /// Get the configured endpoint base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a single page request
    ///
    /// The response is consumed by `text()` before returning, so the
    /// connection is released on every path.
    ///
    /// # Errors
    /// - `RequestConstruction` - URL or header could not be built
    /// - `Transport` - Network error or timeout
    /// - `BodyRead` - Body could not be read to the end
    async fn do_fetch(&self, query: &str, offset: usize) -> Result<String> {
        let url = build_search_url(&self.base_url, query, offset);

        let request = self
            .client
            .get(&url)
            .header(USER_AGENT, self.user_agent.as_str())
            .build()
            .map_err(BingError::RequestConstruction)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(BingError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            // Still read the body: an error page simply yields no anchors
            warn!(%status, offset, "search page returned non-success status");
        }

        let body = response.text().await.map_err(BingError::BodyRead)?;
        debug!(offset, bytes = body.len(), "fetched search page");
        Ok(body)
    }
}

impl PageSource for BingClient {
    async fn fetch_page(&self, query: &str, offset: usize) -> Result<String> {
        self.do_fetch(query, offset).await
    }
}
