//! Alumni browser application module.
//!
//! Terminal setup, the runtime event loop, its background workers, and persistence of the
//! one UI flag that survives restarts.

/// Persistence of the sidebar flag.
pub mod persist;
/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{RunOptions, run};
pub use runtime::init::initialize_app_state;
pub use runtime::workers::{spawn_feed_worker, spawn_search_worker};
pub use runtime::handlers::{handle_page_outcome, handle_search_event};
