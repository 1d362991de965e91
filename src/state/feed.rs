//! Incremental alumni feed: exclusion tracking plus the pagination state machine.

use std::collections::HashSet;

use crate::state::types::{AlumniRecord, FeedPage, PageOutcome, PageRequest};

/// Identifiers of records already delivered this session.
///
/// Append-only and duplicate-free; the order of first insertion is preserved because the
/// whole sequence is resent verbatim on every listing call.
#[derive(Clone, Debug, Default)]
pub struct ExclusionSet {
    /// Identifiers in first-seen order.
    order: Vec<u64>,
    /// Membership index over `order`.
    seen: HashSet<u64>,
}

impl ExclusionSet {
    /// What: Track identifiers returned by a successful page.
    ///
    /// Inputs:
    /// - `identifiers`: Newly consumed identifiers, in server order.
    ///
    /// Output:
    /// - Number of identifiers that were not tracked before.
    ///
    /// Details:
    /// - Identifiers already present are skipped so the set never holds duplicates.
    pub fn record_seen(&mut self, identifiers: &[u64]) -> usize {
        let before = self.order.len();
        for &id in identifiers {
            if self.seen.insert(id) {
                self.order.push(id);
            }
        }
        self.order.len() - before
    }

    /// Opaque payload resent on every listing call.
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.order
    }

    /// Number of tracked identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been tracked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `id` was already delivered.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.seen.contains(&id)
    }
}

/// Observable phase of the pagination machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedPhase {
    /// Ready to load the next page on the next trigger.
    Idle,
    /// A page request is in flight.
    Loading,
    /// The server reported no more records; no further requests are issued.
    Exhausted,
}

/// Why a trigger did not produce a page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchSkip {
    /// A request is already in flight.
    AlreadyLoading,
    /// The feed is exhausted.
    Exhausted,
    /// The search overlay is active.
    SearchActive,
}

/// What: Owner of the paginated feed, its exclusion set, and the pagination flags.
///
/// Details:
/// - `is_loading`/`has_more` start at `false`/`true`.
/// - Flags only change in `begin_fetch` and `apply`.
#[derive(Clone, Debug)]
pub struct FeedController {
    /// Records in delivery order.
    items: Vec<AlumniRecord>,
    /// Identifiers already delivered.
    exclusions: ExclusionSet,
    /// A page request is outstanding.
    is_loading: bool,
    /// The server may still hold records back.
    has_more: bool,
    /// Identifier of the outstanding request, if any.
    pending: Option<u64>,
    /// Next request identifier to hand out.
    next_request_id: u64,
    /// Number of successful pages applied.
    pages_loaded: usize,
    /// Message from the last failed attempt, cleared by the next attempt.
    last_error: Option<String>,
}

impl Default for FeedController {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            exclusions: ExclusionSet::default(),
            is_loading: false,
            has_more: true,
            pending: None,
            next_request_id: 1,
            pages_loaded: 0,
            last_error: None,
        }
    }
}

impl FeedController {
    /// Current phase derived from the loading/has-more flags.
    #[must_use]
    pub const fn phase(&self) -> FeedPhase {
        if self.is_loading {
            FeedPhase::Loading
        } else if self.has_more {
            FeedPhase::Idle
        } else {
            FeedPhase::Exhausted
        }
    }

    /// Records loaded so far.
    #[must_use]
    pub fn items(&self) -> &[AlumniRecord] {
        &self.items
    }

    /// Identifiers delivered so far.
    #[must_use]
    pub const fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether more records may be available.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Number of pages applied successfully.
    #[must_use]
    pub const fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    /// Failure message from the last attempt, if it failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// What: Try to move from `Idle` to `Loading`.
    ///
    /// Inputs:
    /// - `search_active`: Whether the search overlay currently owns the display.
    ///
    /// Output:
    /// - `Ok(PageRequest)` carrying the full exclusion set, or the reason the trigger was ignored.
    ///
    /// # Errors
    /// - `FetchSkip::SearchActive` while a search query or search results are present.
    /// - `FetchSkip::AlreadyLoading` while a request is outstanding.
    /// - `FetchSkip::Exhausted` once the server reported no remaining records.
    pub fn begin_fetch(&mut self, search_active: bool) -> Result<PageRequest, FetchSkip> {
        if search_active {
            return Err(FetchSkip::SearchActive);
        }
        match self.phase() {
            FeedPhase::Loading => return Err(FetchSkip::AlreadyLoading),
            FeedPhase::Exhausted => return Err(FetchSkip::Exhausted),
            FeedPhase::Idle => {}
        }
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending = Some(id);
        self.is_loading = true;
        self.last_error = None;
        tracing::debug!(
            request_id = id,
            excluded = self.exclusions.len(),
            "[Feed] Requesting next page"
        );
        Ok(PageRequest {
            id,
            excluded: self.exclusions.as_slice().to_vec(),
        })
    }

    /// What: Apply a page outcome delivered by the feed worker.
    ///
    /// Inputs:
    /// - `outcome`: Response (or failure) for a prior [`PageRequest`].
    ///
    /// Output:
    /// - `true` when the outcome matched the outstanding request and was applied.
    ///
    /// Details:
    /// - Outcomes for any other request id are dropped untouched.
    /// - Success with items appends them and their identifiers; `remaining <= 0` or an empty
    ///   page moves the machine to `Exhausted`.
    /// - Failure returns to `Idle` so the next trigger retries.
    pub fn apply(&mut self, outcome: PageOutcome) -> bool {
        if self.pending != Some(outcome.id) {
            tracing::debug!(
                request_id = outcome.id,
                pending = ?self.pending,
                "[Feed] Dropping stale page outcome"
            );
            return false;
        }
        self.pending = None;
        self.is_loading = false;
        match outcome.result {
            Ok(page) => self.apply_page(page),
            Err(e) => {
                tracing::warn!(request_id = outcome.id, error = %e, "[Feed] Page fetch failed");
                self.last_error = Some(e.to_string());
            }
        }
        true
    }

    /// What: Merge a successful page into the feed.
    fn apply_page(&mut self, page: FeedPage) {
        let FeedPage {
            items,
            new_identifiers,
            remaining,
        } = page;
        if items.is_empty() {
            self.has_more = false;
            tracing::info!(total = self.items.len(), "[Feed] Empty page, feed exhausted");
            return;
        }
        let added = items.len();
        self.items.extend(items);
        let fresh = self.exclusions.record_seen(&new_identifiers);
        self.has_more = remaining > 0;
        self.pages_loaded += 1;
        tracing::info!(
            added,
            fresh_identifiers = fresh,
            total = self.items.len(),
            remaining,
            "[Feed] Page applied"
        );
    }

    /// What: Forget the outstanding request without touching the feed.
    ///
    /// Details:
    /// - Used on teardown; a late outcome for the forgotten id is then dropped by `apply`.
    pub fn abandon_pending(&mut self) {
        if self.pending.take().is_some() {
            self.is_loading = false;
        }
    }
}
