use tokio::sync::mpsc;

use crate::logic::display::{DisplaySource, display_source};
use crate::state::{AppState, FetchSkip, PageRequest};

/// What: Ask the feed worker for the next page if the pagination machine allows it.
///
/// Inputs:
/// - `app`: State holding the feed controller and the search store.
/// - `page_tx`: Channel to the feed worker.
///
/// Output:
/// - `true` when a request was sent.
///
/// Details:
/// - Suppressed while loading, after exhaustion, and while the search overlay is active.
pub fn request_next_page(app: &mut AppState, page_tx: &mpsc::UnboundedSender<PageRequest>) -> bool {
    let search_active = app.search.is_active();
    match app.feed.begin_fetch(search_active) {
        Ok(req) => {
            if page_tx.send(req).is_err() {
                tracing::warn!("[Feed] Worker channel closed; dropping page request");
                app.feed.abandon_pending();
                return false;
            }
            true
        }
        Err(skip) => {
            if skip != FetchSkip::AlreadyLoading {
                tracing::trace!(reason = ?skip, "[Feed] Page trigger ignored");
            }
            false
        }
    }
}

/// What: Whether the selection sits within the prefetch threshold of the feed's end.
///
/// Details:
/// - Only meaningful while the feed is displayed; returns `false` under the search overlay.
#[must_use]
pub fn is_near_end(app: &AppState) -> bool {
    if display_source(app) != DisplaySource::Feed {
        return false;
    }
    let len = app.feed.items().len();
    app.selected.saturating_add(app.prefetch_threshold) >= len
}

/// What: Fire the near-end trigger after the selection moved.
pub fn maybe_request_next_page(
    app: &mut AppState,
    page_tx: &mpsc::UnboundedSender<PageRequest>,
) -> bool {
    is_near_end(app) && request_next_page(app, page_tx)
}
