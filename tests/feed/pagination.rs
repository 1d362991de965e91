//! Pagination triggers and the exclusion set, driven through the event-loop helpers.

use alumni_tui::app::handle_page_outcome;
use alumni_tui::logic::{displayed_items, request_next_page, send_query, close_search};
use alumni_tui::state::{AppState, FeedPhase, PageOutcome, PageRequest, QueryInput};
use tokio::sync::mpsc;

use crate::fake_directory::{network_error, page};

/// Send one page request and answer it with `result`.
fn load(
    app: &mut AppState,
    page_tx: &mpsc::UnboundedSender<PageRequest>,
    page_rx: &mut mpsc::UnboundedReceiver<PageRequest>,
    result: alumni_tui::error::FeedResult<alumni_tui::state::FeedPage>,
) -> PageRequest {
    let req = page_rx.try_recv().unwrap_or_else(|_| {
        assert!(request_next_page(app, page_tx), "trigger should fire");
        page_rx.try_recv().expect("request sent")
    });
    handle_page_outcome(
        app,
        PageOutcome {
            id: req.id,
            result,
        },
        page_tx,
    );
    req
}

#[test]
/// What: 20 items with 5 remaining, then 5 items with 0 remaining, exhausts the feed at 25.
fn two_pages_exhaust_at_twenty_five() {
    let mut app = AppState::default();
    let (ptx, mut prx) = mpsc::unbounded_channel();

    let first = load(&mut app, &ptx, &mut prx, Ok(page(0, 20, 5)));
    assert!(first.excluded.is_empty());
    assert_eq!(app.feed.phase(), FeedPhase::Idle);

    let second = load(&mut app, &ptx, &mut prx, Ok(page(20, 5, 0)));
    assert_eq!(second.excluded, (0..20).collect::<Vec<u64>>());

    assert_eq!(app.feed.items().len(), 25);
    assert_eq!(app.feed.phase(), FeedPhase::Exhausted);
    assert!(!request_next_page(&mut app, &ptx));
    assert!(prx.try_recv().is_err());
}

#[test]
/// What: Feed length is the sum of page sizes; exclusions concatenate without duplicates.
fn exclusions_accumulate_without_duplicates() {
    let mut app = AppState::default();
    let (ptx, mut prx) = mpsc::unbounded_channel();

    load(&mut app, &ptx, &mut prx, Ok(page(0, 20, 30)));
    let mut overlapping = page(20, 10, 20);
    overlapping.new_identifiers.push(3);
    load(&mut app, &ptx, &mut prx, Ok(overlapping));
    let third = load(&mut app, &ptx, &mut prx, Ok(page(30, 10, 10)));

    assert_eq!(app.feed.items().len(), 40);
    assert_eq!(third.excluded, (0..30).collect::<Vec<u64>>());
    assert_eq!(app.feed.exclusions().as_slice(), (0..40).collect::<Vec<u64>>());
}

#[test]
/// What: An empty page ends pagination even when `remaining` is positive.
fn empty_page_exhausts() {
    let mut app = AppState::default();
    let (ptx, mut prx) = mpsc::unbounded_channel();
    load(&mut app, &ptx, &mut prx, Ok(page(0, 20, 5)));
    load(&mut app, &ptx, &mut prx, Ok(page(20, 0, 5)));
    assert_eq!(app.feed.phase(), FeedPhase::Exhausted);
    assert_eq!(app.feed.items().len(), 20);
    assert!(!request_next_page(&mut app, &ptx));
}

#[test]
/// What: A failure returns to idle; the next trigger retries with the same exclusions.
fn failure_allows_retry() {
    let mut app = AppState::default();
    let (ptx, mut prx) = mpsc::unbounded_channel();
    load(&mut app, &ptx, &mut prx, Ok(page(0, 20, 5)));
    let failed = load(&mut app, &ptx, &mut prx, Err(network_error()));
    assert_eq!(app.feed.phase(), FeedPhase::Idle);
    assert!(app.feed.last_error().is_some());
    assert_eq!(app.feed.items().len(), 20);

    let retry = load(&mut app, &ptx, &mut prx, Ok(page(20, 5, 0)));
    assert_eq!(retry.excluded, failed.excluded);
    assert!(app.feed.last_error().is_none());
    assert_eq!(app.feed.items().len(), 25);
}

#[test]
/// What: No page request is issued while a query or search results are present.
fn search_overlay_pauses_pagination() {
    let mut app = AppState::default();
    let (ptx, mut prx) = mpsc::unbounded_channel();
    let (qtx, _qrx) = mpsc::unbounded_channel::<QueryInput>();
    load(&mut app, &ptx, &mut prx, Ok(page(0, 20, 5)));

    send_query(&mut app, "Jane".into(), &qtx);
    assert!(!request_next_page(&mut app, &ptx));
    assert!(prx.try_recv().is_err());

    send_query(&mut app, "   ".into(), &qtx);
    assert!(request_next_page(&mut app, &ptx));
}

#[test]
/// What: Clearing the search shows the feed exactly as it was, with no re-fetch.
fn closing_search_restores_feed() {
    let mut app = AppState::default();
    let (ptx, mut prx) = mpsc::unbounded_channel();
    let (qtx, _qrx) = mpsc::unbounded_channel::<QueryInput>();
    load(&mut app, &ptx, &mut prx, Ok(page(0, 20, 5)));
    let before: Vec<String> = app.feed.items().iter().map(|r| r.name.clone()).collect();

    send_query(&mut app, "Jane".into(), &qtx);
    let id = app.search.latest_id();
    alumni_tui::app::handle_search_event(
        &mut app,
        alumni_tui::state::SearchEvent::Finished {
            id,
            result: Ok(crate::fake_directory::records(900, 2)),
        },
    );
    assert_eq!(displayed_items(&app).len(), 2);

    close_search(&mut app, &qtx);
    let after: Vec<String> = displayed_items(&app).iter().map(|r| r.name.clone()).collect();
    assert_eq!(before, after);
    assert!(prx.try_recv().is_err());
    assert_eq!(app.feed.pages_loaded(), 1);
}

#[test]
/// What: An outcome for an abandoned request is ignored.
fn abandoned_request_outcome_is_dropped() {
    let mut app = AppState::default();
    let (ptx, mut prx) = mpsc::unbounded_channel();
    assert!(request_next_page(&mut app, &ptx));
    let req = prx.try_recv().expect("request");
    app.feed.abandon_pending();
    handle_page_outcome(
        &mut app,
        PageOutcome {
            id: req.id,
            result: Ok(page(0, 20, 5)),
        },
        &ptx,
    );
    assert!(app.feed.items().is_empty());
    assert_eq!(app.feed.phase(), FeedPhase::Idle);
}
