use crate::state::{AlumniRecord, AppState};

/// Which list the renderer shows this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplaySource {
    /// Paginated feed.
    Feed,
    /// Search results (possibly empty when the search settled without matches).
    Search,
}

/// What: Decide which list is authoritative for this render.
///
/// Inputs:
/// - `app`: Current state.
///
/// Output:
/// - `Search` when results are present, or when the current non-blank query settled with an
///   advisory; `Feed` otherwise.
///
/// Details:
/// - While a new query is still inside its debounce window the feed stays visible.
#[must_use]
pub fn display_source(app: &AppState) -> DisplaySource {
    let search = &app.search;
    if !search.results().is_empty() || (search.has_query() && search.advisory().is_some()) {
        DisplaySource::Search
    } else {
        DisplaySource::Feed
    }
}

/// What: Records to render this frame; never mutates either underlying list.
#[must_use]
pub fn displayed_items(app: &AppState) -> &[AlumniRecord] {
    match display_source(app) {
        DisplaySource::Search => app.search.results(),
        DisplaySource::Feed => app.feed.items(),
    }
}
