use serde::Deserialize;

use crate::error::{FeedError, FeedResult};
use crate::state::AlumniRecord;

/// Response body of the search endpoint.
#[derive(Deserialize)]
struct SearchBody {
    /// Matching records; absent means none.
    #[serde(default)]
    items: Vec<AlumniRecord>,
}

/// What: Build `{base}/search?q=<query>` with the query percent-encoded.
///
/// # Errors
/// - `FeedError::Network` when `base_url` is not a valid URL.
pub fn search_url(base_url: &str, query: &str) -> FeedResult<reqwest::Url> {
    reqwest::Url::parse_with_params(&format!("{base_url}/search"), &[("q", query)])
        .map_err(|e| FeedError::Network(format!("invalid search URL: {e}")))
}

/// What: Query `GET {base}/search?q=<query>`.
///
/// Inputs:
/// - `client`: Shared HTTP client.
/// - `base_url`: Service root without trailing slash.
/// - `query`: Free text; trimmed before sending.
///
/// Output:
/// - Matching records in server order.
///
/// # Errors
/// - `FeedError::EmptyResult` when the response is well formed but nothing matched.
/// - `FeedError::Network`, `FeedError::Status`, or `FeedError::Decode` on failure.
///
/// Details:
/// - A blank query returns `Ok(vec![])` without touching the network.
pub async fn search_alumni(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
) -> FeedResult<Vec<AlumniRecord>> {
    let q = query.trim();
    if q.is_empty() {
        return Ok(Vec::new());
    }
    let url = search_url(base_url, q)?;
    tracing::debug!(url = %url, "[Search] GET search");
    let resp = client.get(url).send().await?;
    let body = super::read_body(resp).await?;
    let items = parse_search_body(&body)?;
    if items.is_empty() {
        return Err(FeedError::EmptyResult);
    }
    Ok(items)
}

/// What: Decode a search response body.
///
/// # Errors
/// - `FeedError::Decode` when the JSON does not match the search shape.
pub fn parse_search_body(body: &str) -> FeedResult<Vec<AlumniRecord>> {
    let parsed: SearchBody = serde_json::from_str(body)?;
    Ok(parsed.items)
}
