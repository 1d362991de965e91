/// Paginated listing worker.
pub mod feed;
/// Debounced search worker.
pub mod search;

pub use feed::spawn_feed_worker;
pub use search::spawn_search_worker;
