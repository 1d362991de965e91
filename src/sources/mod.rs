//! Directory service access: the listing and search endpoints behind one trait.

use std::future::Future;
use std::time::Duration;

use crate::error::{FeedError, FeedResult};
use crate::state::{AlumniRecord, FeedPage};

mod feed;
mod search;

pub use feed::{fetch_next_page, parse_page_body};
pub use search::{parse_search_body, search_alumni, search_url};

/// What: The two remote calls the feed controller depends on.
///
/// Details:
/// - Implemented over HTTP by [`HttpDirectory`]; workers are generic over it so tests can
///   drive them with an in-memory directory.
pub trait AlumniDirectory: Send + Sync + 'static {
    /// Fetch the next page, excluding every identifier already delivered.
    fn fetch_next_page(&self, excluded: Vec<u64>)
    -> impl Future<Output = FeedResult<FeedPage>> + Send;

    /// Run a free-text search.
    fn search(&self, query: String) -> impl Future<Output = FeedResult<Vec<AlumniRecord>>> + Send;
}

/// Directory service reached over HTTP with a pooled `reqwest` client.
#[derive(Clone, Debug)]
pub struct HttpDirectory {
    /// Shared client (connection pooling is enabled by default).
    client: reqwest::Client,
    /// Service root without trailing slash.
    base_url: String,
}

impl HttpDirectory {
    /// What: Build a directory client with the configured timeout.
    ///
    /// Inputs:
    /// - `base_url`: Service root, e.g. `http://localhost:3001`.
    /// - `timeout`: Per-request timeout; connect timeout is capped at the same value.
    ///
    /// Output:
    /// - `Ok(HttpDirectory)`; `Err` when the TLS backend cannot be initialized.
    ///
    /// # Errors
    /// - Returns `FeedError::Network` when the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> FeedResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .timeout(timeout)
            .user_agent(format!("alumni-tui/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FeedError::Network(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Wrap an already configured client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Service root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AlumniDirectory for HttpDirectory {
    fn fetch_next_page(
        &self,
        excluded: Vec<u64>,
    ) -> impl Future<Output = FeedResult<FeedPage>> + Send {
        let client = self.client.clone();
        let base = self.base_url.clone();
        async move { fetch_next_page(&client, &base, &excluded).await }
    }

    fn search(&self, query: String) -> impl Future<Output = FeedResult<Vec<AlumniRecord>>> + Send {
        let client = self.client.clone();
        let base = self.base_url.clone();
        async move { search_alumni(&client, &base, &query).await }
    }
}

/// What: Turn a response into its body text, mapping non-success statuses to errors.
async fn read_body(resp: reqwest::Response) -> FeedResult<String> {
    let status = resp.status();
    if !status.is_success() {
        return Err(FeedError::Status(status.as_u16()));
    }
    resp.text()
        .await
        .map_err(|e| FeedError::Network(format!("Failed to read response: {e}")))
}
