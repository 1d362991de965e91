use serde::Serialize;

use crate::error::FeedResult;
use crate::state::FeedPage;

/// Request body of the listing endpoint.
#[derive(Serialize)]
struct PageBody<'a> {
    /// Identifiers the server must not return again.
    indexes: &'a [u64],
}

/// What: Fetch the next page of alumni from `POST {base}/ran`.
///
/// Inputs:
/// - `client`: Shared HTTP client.
/// - `base_url`: Service root without trailing slash.
/// - `excluded`: Every identifier delivered so far this session.
///
/// Output:
/// - `Ok(FeedPage)` with new records, their identifiers, and the remaining count.
///
/// # Errors
/// - `FeedError::Network` on transport failures.
/// - `FeedError::Status` on a non-success HTTP status.
/// - `FeedError::Decode` when the body is not a listing payload.
///
/// Details:
/// - No retry and no backoff; the caller decides when to try again.
pub async fn fetch_next_page(
    client: &reqwest::Client,
    base_url: &str,
    excluded: &[u64],
) -> FeedResult<FeedPage> {
    let url = format!("{base_url}/ran");
    tracing::debug!(url = %url, excluded = excluded.len(), "[Feed] POST listing");
    let resp = client
        .post(&url)
        .json(&PageBody { indexes: excluded })
        .send()
        .await?;
    let body = super::read_body(resp).await?;
    let page = parse_page_body(&body)?;
    tracing::debug!(
        items = page.items.len(),
        identifiers = page.new_identifiers.len(),
        remaining = page.remaining,
        "[Feed] Listing response decoded"
    );
    Ok(page)
}

/// What: Decode a listing response body.
///
/// # Errors
/// - `FeedError::Decode` when the JSON does not match the listing shape.
pub fn parse_page_body(body: &str) -> FeedResult<FeedPage> {
    Ok(serde_json::from_str(body)?)
}
