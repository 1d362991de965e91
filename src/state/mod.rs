//! Application state: the feed controller, the search store, and view flags.

pub mod app_state;
pub mod feed;
pub mod modal;
pub mod search;
pub mod types;

pub use app_state::{AppState, Focus};
pub use feed::{ExclusionSet, FeedController, FeedPhase, FetchSkip};
pub use modal::Modal;
pub use search::{SearchAdvisory, SearchState};
pub use types::{AlumniRecord, FeedPage, PageOutcome, PageRequest, QueryInput, SearchEvent};
