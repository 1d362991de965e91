//! In-memory directory used to drive the workers without a network.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use alumni_tui::error::{FeedError, FeedResult};
use alumni_tui::sources::AlumniDirectory;
use alumni_tui::state::{AlumniRecord, FeedPage};

/// Scripted responses plus a log of every call made.
#[derive(Default)]
pub struct FakeDirectory {
    /// Listing responses served in order; an empty queue answers with an exhausted page.
    pub pages: Mutex<VecDeque<FeedResult<FeedPage>>>,
    /// Exclusion lists received by `fetch_next_page`.
    pub page_calls: Mutex<Vec<Vec<u64>>>,
    /// Search responses keyed by query; unknown queries answer `EmptyResult`.
    pub search_results: Mutex<HashMap<String, FeedResult<Vec<AlumniRecord>>>>,
    /// Queries received by `search`.
    pub search_calls: Mutex<Vec<String>>,
    /// Artificial latency of every call.
    pub latency: Duration,
}

#[allow(dead_code)]
impl FakeDirectory {
    pub fn with_pages(pages: Vec<FeedResult<FeedPage>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            ..Default::default()
        }
    }

    pub fn answer(&self, query: &str, result: FeedResult<Vec<AlumniRecord>>) {
        self.search_results
            .lock()
            .expect("lock")
            .insert(query.to_string(), result);
    }

    pub fn page_calls(&self) -> Vec<Vec<u64>> {
        self.page_calls.lock().expect("lock").clone()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().expect("lock").clone()
    }
}

impl AlumniDirectory for FakeDirectory {
    fn fetch_next_page(
        &self,
        excluded: Vec<u64>,
    ) -> impl Future<Output = FeedResult<FeedPage>> + Send {
        self.page_calls.lock().expect("lock").push(excluded);
        let next = self
            .pages
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Ok(FeedPage::default()));
        let latency = self.latency;
        async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            next
        }
    }

    fn search(&self, query: String) -> impl Future<Output = FeedResult<Vec<AlumniRecord>>> + Send {
        self.search_calls.lock().expect("lock").push(query.clone());
        let result = self
            .search_results
            .lock()
            .expect("lock")
            .get(&query)
            .cloned()
            .unwrap_or(Err(FeedError::EmptyResult));
        let latency = self.latency;
        async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            result
        }
    }
}

/// Records named `Alumnus <n>` for `n` in `start..start + count`.
#[allow(dead_code)]
pub fn records(start: u64, count: usize) -> Vec<AlumniRecord> {
    (start..start + count as u64)
        .map(|n| AlumniRecord {
            name: format!("Alumnus {n}"),
            company: format!("Company {n}"),
            batch: 2000 + i32::try_from(n % 20).unwrap_or(0),
            email: format!("alumnus{n}@example.com"),
            field: "Engineering".into(),
            ..Default::default()
        })
        .collect()
}

/// A page of `count` records with identifiers `start..start + count`.
#[allow(dead_code)]
pub fn page(start: u64, count: usize, remaining: i64) -> FeedPage {
    FeedPage {
        items: records(start, count),
        new_identifiers: (start..start + count as u64).collect(),
        remaining,
    }
}

/// A transport failure.
#[allow(dead_code)]
pub fn network_error() -> FeedError {
    FeedError::Network("connection refused".into())
}
