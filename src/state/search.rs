//! Search overlay store: query text, results, and in-flight tracking.

use crate::error::FeedError;
use crate::state::types::{AlumniRecord, SearchEvent};

/// Short message shown under the search input after a search settles badly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchAdvisory {
    /// The endpoint answered but nothing matched.
    NoResults,
    /// The request failed.
    Failed,
}

impl SearchAdvisory {
    /// User-facing text for the advisory.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoResults => "No matching alumni found",
            Self::Failed => "Unable to complete search. Please try again.",
        }
    }
}

/// What: Single-owner search state observed by the search bar, the list, and the sidebar.
///
/// Details:
/// - Only the `set_query`/`apply_event`/`close` entry points mutate it.
/// - Every query change takes a new id; only events for the latest id are applied.
#[derive(Clone, Debug)]
pub struct SearchState {
    /// Raw query text as typed.
    query: String,
    /// Results for the latest settled query.
    results: Vec<AlumniRecord>,
    /// A request for the latest query is outstanding.
    is_searching: bool,
    /// Advisory for the latest settled query.
    advisory: Option<SearchAdvisory>,
    /// Id of the latest query handed to the worker.
    latest_id: u64,
    /// Next id to hand out.
    next_id: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            is_searching: false,
            advisory: None,
            latest_id: 0,
            next_id: 1,
        }
    }
}

impl SearchState {
    /// Raw query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results of the latest settled query.
    #[must_use]
    pub fn results(&self) -> &[AlumniRecord] {
        &self.results
    }

    /// Whether a request for the current query is in flight.
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.is_searching
    }

    /// Advisory for the current query, if any.
    #[must_use]
    pub const fn advisory(&self) -> Option<SearchAdvisory> {
        self.advisory
    }

    /// Id of the latest query.
    #[must_use]
    pub const fn latest_id(&self) -> u64 {
        self.latest_id
    }

    /// Whether the query holds anything besides whitespace.
    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// What: Whether the overlay currently pauses pagination.
    ///
    /// Output:
    /// - `true` while the query is non-blank or results are present.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.has_query() || !self.results.is_empty()
    }

    /// What: Replace the query text and mint the id for the worker.
    ///
    /// Inputs:
    /// - `text`: New query text.
    ///
    /// Output:
    /// - The id to send along with the text.
    ///
    /// Details:
    /// - Any outstanding request now belongs to a superseded query, so `is_searching` drops.
    /// - The advisory belonged to the previous query and is cleared.
    /// - A blank query also clears results right away; no request is made for it.
    pub fn set_query(&mut self, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.latest_id = id;
        self.query = text;
        self.is_searching = false;
        self.advisory = None;
        if !self.has_query() {
            self.results.clear();
        }
        id
    }

    /// What: Apply a worker notification.
    ///
    /// Inputs:
    /// - `event`: `Started` or `Finished` for some query id.
    ///
    /// Output:
    /// - `true` when the event belonged to the latest query and was applied.
    pub fn apply_event(&mut self, event: SearchEvent) -> bool {
        match event {
            SearchEvent::Started { id } => {
                if id != self.latest_id {
                    return false;
                }
                self.is_searching = true;
                true
            }
            SearchEvent::Finished { id, result } => {
                if id != self.latest_id {
                    tracing::debug!(
                        query_id = id,
                        latest = self.latest_id,
                        "[Search] Discarding superseded response"
                    );
                    return false;
                }
                self.is_searching = false;
                self.settle(result);
                true
            }
        }
    }

    /// What: Store a settled result for the latest query.
    fn settle(&mut self, result: Result<Vec<AlumniRecord>, FeedError>) {
        if !self.has_query() {
            self.results.clear();
            self.advisory = None;
            return;
        }
        match result {
            Ok(items) if items.is_empty() => {
                self.results.clear();
                self.advisory = Some(SearchAdvisory::NoResults);
            }
            Ok(items) => {
                tracing::debug!(count = items.len(), "[Search] Results applied");
                self.results = items;
                self.advisory = None;
            }
            Err(e) if !e.is_network_failure() => {
                self.results.clear();
                self.advisory = Some(SearchAdvisory::NoResults);
            }
            Err(e) => {
                tracing::warn!(error = %e, "[Search] Search failed");
                self.results.clear();
                self.advisory = Some(SearchAdvisory::Failed);
            }
        }
    }

    /// What: Dismiss the overlay: blank query, no results, no advisory.
    ///
    /// Output:
    /// - The id of the blank query to forward to the worker.
    pub fn close(&mut self) -> u64 {
        self.set_query(String::new())
    }
}
