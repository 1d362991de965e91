use tokio::sync::mpsc;

use crate::logic::{DisplaySource, display_source, displayed_items, maybe_request_next_page};
use crate::state::{AppState, PageOutcome, PageRequest, SearchEvent};

/// What: Apply a page outcome from the feed worker.
///
/// Inputs:
/// - `app`: Application state
/// - `outcome`: Page result tagged with its request id
/// - `page_tx`: Channel to the feed worker, used to keep filling a short list
///
/// Details:
/// - Outcomes for abandoned requests are dropped by the controller.
/// - After a successful page, a selection already inside the prefetch window requests the
///   next page immediately, so a short first page does not strand the user.
pub fn handle_page_outcome(
    app: &mut AppState,
    outcome: PageOutcome,
    page_tx: &mpsc::UnboundedSender<PageRequest>,
) {
    let ok = outcome.result.is_ok();
    if !app.feed.apply(outcome) {
        return;
    }
    tracing::debug!(
        items = app.feed.items().len(),
        exclusions = app.feed.exclusions().len(),
        has_more = app.feed.has_more(),
        "[Feed] Page applied"
    );
    if display_source(app) == DisplaySource::Feed {
        let len = app.feed.items().len();
        app.clamp_selection(len);
        if ok {
            maybe_request_next_page(app, page_tx);
        }
    }
}

/// What: Apply a search worker notification and keep the selection in range.
pub fn handle_search_event(app: &mut AppState, event: SearchEvent) {
    if app.search.apply_event(event) {
        let len = displayed_items(app).len();
        app.clamp_selection(len);
    }
}
