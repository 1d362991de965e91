use tokio::sync::mpsc;

use crate::state::{AppState, QueryInput};

/// What: Send the current query text to the search worker under a fresh id.
///
/// Inputs:
/// - `app`: State whose search store mints the id.
/// - `text`: New query text.
/// - `query_tx`: Channel to the debounced search worker.
///
/// Details:
/// - Blank text is still forwarded so the worker drops any pending query in its window.
pub fn send_query(app: &mut AppState, text: String, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let id = app.search.set_query(text.clone());
    app.selected = 0;
    let _ = query_tx.send(QueryInput { id, text });
}

/// What: Dismiss the search overlay and return to the feed where it stood.
pub fn close_search(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let id = app.search.close();
    app.selected = 0;
    let _ = query_tx.send(QueryInput {
        id,
        text: String::new(),
    });
    tracing::debug!(query_id = id, "[Search] Overlay closed");
}
