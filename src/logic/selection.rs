use tokio::sync::mpsc;

use crate::logic::display::displayed_items;
use crate::logic::pagination::maybe_request_next_page;
use crate::state::{AppState, PageRequest};

/// What: Move the selection by `delta` over the displayed list.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `delta`: Rows to move; negative moves up.
/// - `page_tx`: Channel to the feed worker, used when the move lands near the end.
///
/// Details:
/// - Clamps to the valid range and syncs the list widget state.
/// - Landing within the prefetch threshold of the feed's end triggers the next page.
pub fn move_sel(app: &mut AppState, delta: isize, page_tx: &mpsc::UnboundedSender<PageRequest>) {
    let len = displayed_items(app).len();
    if len > 0 {
        let target = app.selected.saturating_add_signed(delta);
        app.selected = target.min(len - 1);
    }
    app.clamp_selection(len);
    maybe_request_next_page(app, page_tx);
}

/// What: Jump to the first displayed row.
pub fn select_first(app: &mut AppState) {
    app.selected = 0;
    let len = displayed_items(app).len();
    app.clamp_selection(len);
}

/// What: Jump to the last displayed row, triggering the next page when the feed is shown.
pub fn select_last(app: &mut AppState, page_tx: &mpsc::UnboundedSender<PageRequest>) {
    let len = displayed_items(app).len();
    app.selected = len.saturating_sub(1);
    app.clamp_selection(len);
    maybe_request_next_page(app, page_tx);
}
