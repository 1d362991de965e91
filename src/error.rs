//! Error taxonomy for the directory network layer.

/// Convenience alias used by the `sources` layer.
pub type FeedResult<T> = std::result::Result<T, FeedError>;

/// What: Failure reported by a listing or search call.
///
/// Details:
/// - Pagination treats every variant the same way (back to idle, retry on next trigger).
/// - Search maps `EmptyResult` to the "no results" advisory and everything else to "failed".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    /// Transport-level failure (connect, timeout, TLS, body read).
    #[error("network error: {0}")]
    Network(String),
    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    Status(u16),
    /// The body was not the JSON shape we expect.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Well-formed response without any matching records.
    #[error("no matching records")]
    EmptyResult,
}

impl FeedError {
    /// What: Whether the failure came from the network rather than from the data.
    #[must_use]
    pub const fn is_network_failure(&self) -> bool {
        !matches!(self, Self::EmptyResult)
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Status(status.as_u16());
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
