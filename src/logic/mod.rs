//! Application logic helpers shared by the event handlers and the runtime.

/// Feed/search merge policy.
pub mod display;
/// Pagination triggers.
pub mod pagination;
/// Query dispatch to the search worker.
pub mod query;
/// Selection movement over the displayed list.
pub mod selection;

pub use display::{DisplaySource, display_source, displayed_items};
pub use pagination::{is_near_end, maybe_request_next_page, request_next_page};
pub use query::{close_search, send_query};
pub use selection::{move_sel, select_first, select_last};
