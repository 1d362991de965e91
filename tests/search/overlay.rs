//! Merge policy: what the list shows while a search is typed, settled, or closed.

use std::sync::Arc;
use std::time::Duration;

use alumni_tui::app::{handle_page_outcome, handle_search_event, spawn_search_worker};
use alumni_tui::error::FeedError;
use alumni_tui::logic::{DisplaySource, display_source, displayed_items, send_query};
use alumni_tui::state::{AppState, PageOutcome, SearchAdvisory, SearchEvent};
use tokio::sync::mpsc;

use crate::fake_directory::{FakeDirectory, page, records};

fn app_with_feed(n: usize) -> AppState {
    let mut app = AppState::default();
    let (ptx, _prx) = mpsc::unbounded_channel();
    let req = app.feed.begin_fetch(false).expect("idle");
    handle_page_outcome(
        &mut app,
        PageOutcome {
            id: req.id,
            result: Ok(page(0, n, 100)),
        },
        &ptx,
    );
    app
}

#[tokio::test(start_paused = true)]
/// What: A search with no matches shows the no-results advisory over an empty list.
async fn no_match_shows_advisory_and_empty_list() {
    let mut app = app_with_feed(20);
    let dir = Arc::new(FakeDirectory::default());
    let (qtx, qrx) = mpsc::unbounded_channel();
    let (stx, mut srx) = mpsc::unbounded_channel();
    let _handle = spawn_search_worker(dir, qrx, stx, Duration::from_millis(300));

    send_query(&mut app, "zzz-no-match".into(), &qtx);
    assert_eq!(display_source(&app), DisplaySource::Feed);

    loop {
        let ev = tokio::time::timeout(Duration::from_secs(5), srx.recv())
            .await
            .expect("event in time")
            .expect("worker alive");
        let done = matches!(ev, SearchEvent::Finished { .. });
        handle_search_event(&mut app, ev);
        if done {
            break;
        }
    }

    assert_eq!(app.search.advisory(), Some(SearchAdvisory::NoResults));
    assert_eq!(
        app.search.advisory().map(SearchAdvisory::message),
        Some("No matching alumni found")
    );
    assert_eq!(display_source(&app), DisplaySource::Search);
    assert!(displayed_items(&app).is_empty());
    assert_eq!(app.feed.items().len(), 20);
}

#[test]
/// What: A late response for an older query never replaces the newer query's results.
fn stale_response_is_discarded() {
    let mut app = app_with_feed(10);
    let (qtx, _qrx) = mpsc::unbounded_channel();
    send_query(&mut app, "Jane".into(), &qtx);
    let old = app.search.latest_id();
    send_query(&mut app, "Jane Doe".into(), &qtx);
    let new = app.search.latest_id();

    handle_search_event(
        &mut app,
        SearchEvent::Finished {
            id: new,
            result: Ok(records(500, 1)),
        },
    );
    handle_search_event(
        &mut app,
        SearchEvent::Finished {
            id: old,
            result: Ok(records(600, 4)),
        },
    );
    let shown: Vec<&str> = displayed_items(&app).iter().map(|r| r.name.as_str()).collect();
    assert_eq!(shown, vec!["Alumnus 500"]);
}

#[test]
/// What: A failed search surfaces the retry advisory.
fn failure_sets_retry_advisory() {
    let mut app = app_with_feed(10);
    let (qtx, _qrx) = mpsc::unbounded_channel();
    send_query(&mut app, "Jane".into(), &qtx);
    let id = app.search.latest_id();
    handle_search_event(&mut app, SearchEvent::Started { id });
    assert!(app.search.is_searching());
    handle_search_event(
        &mut app,
        SearchEvent::Finished {
            id,
            result: Err(FeedError::Status(500)),
        },
    );
    assert!(!app.search.is_searching());
    assert_eq!(
        app.search.advisory().map(SearchAdvisory::message),
        Some("Unable to complete search. Please try again.")
    );
    assert!(displayed_items(&app).is_empty());
}

#[test]
/// What: After a no-match search, a new query shows the feed again until it settles.
fn new_query_drops_previous_no_results_advisory() {
    let mut app = app_with_feed(10);
    let (qtx, _qrx) = mpsc::unbounded_channel();
    send_query(&mut app, "zzz".into(), &qtx);
    let id = app.search.latest_id();
    handle_search_event(
        &mut app,
        SearchEvent::Finished {
            id,
            result: Err(FeedError::EmptyResult),
        },
    );
    assert_eq!(display_source(&app), DisplaySource::Search);

    send_query(&mut app, "Jane".into(), &qtx);
    assert_eq!(app.search.advisory(), None);
    assert_eq!(display_source(&app), DisplaySource::Feed);

    let id = app.search.latest_id();
    handle_search_event(&mut app, SearchEvent::Started { id });
    assert!(app.search.is_searching());
    assert_eq!(app.search.advisory(), None);
    assert_eq!(displayed_items(&app).len(), 10);
}

#[test]
/// What: The feed stays visible while the first query is still debouncing.
fn feed_visible_while_typing() {
    let mut app = app_with_feed(10);
    let (qtx, _qrx) = mpsc::unbounded_channel();
    send_query(&mut app, "J".into(), &qtx);
    assert_eq!(display_source(&app), DisplaySource::Feed);
    assert_eq!(displayed_items(&app).len(), 10);
}
