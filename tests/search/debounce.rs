//! Debounced search worker under paused tokio time.

use std::sync::Arc;
use std::time::Duration;

use alumni_tui::app::spawn_search_worker;
use alumni_tui::state::{QueryInput, SearchEvent};
use tokio::sync::mpsc;

use crate::fake_directory::{FakeDirectory, records};

const DEBOUNCE: Duration = Duration::from_millis(300);

fn query(id: u64, text: &str) -> QueryInput {
    QueryInput {
        id,
        text: text.into(),
    }
}

async fn next_event(rx: &mut mpsc::UnboundedReceiver<SearchEvent>) -> SearchEvent {
    tokio::time::timeout(Duration::from_secs(30), rx.recv())
        .await
        .expect("event in time")
        .expect("worker alive")
}

#[tokio::test(start_paused = true)]
/// What: Two edits inside the debounce window produce one call, for the last text.
async fn burst_collapses_to_last_query() {
    let dir = Arc::new(FakeDirectory::default());
    dir.answer("Jane Doe", Ok(records(1, 1)));
    let (qtx, qrx) = mpsc::unbounded_channel();
    let (stx, mut srx) = mpsc::unbounded_channel();
    let _handle = spawn_search_worker(Arc::clone(&dir), qrx, stx, DEBOUNCE);

    qtx.send(query(1, "Jane")).expect("send");
    tokio::time::sleep(Duration::from_millis(100)).await;
    qtx.send(query(2, "Jane Doe")).expect("send");

    assert_eq!(next_event(&mut srx).await, SearchEvent::Started { id: 2 });
    match next_event(&mut srx).await {
        SearchEvent::Finished { id, result } => {
            assert_eq!(id, 2);
            assert_eq!(result.expect("ok").len(), 1);
        }
        other => panic!("expected Finished, got {other:?}"),
    }
    assert_eq!(dir.search_calls(), vec!["Jane Doe".to_string()]);
}

#[tokio::test(start_paused = true)]
/// What: No request leaves before the quiet window has elapsed.
async fn nothing_is_sent_inside_the_window() {
    let dir = Arc::new(FakeDirectory::default());
    let (qtx, qrx) = mpsc::unbounded_channel();
    let (stx, mut srx) = mpsc::unbounded_channel();
    let _handle = spawn_search_worker(Arc::clone(&dir), qrx, stx, DEBOUNCE);

    qtx.send(query(1, "Ra")).expect("send");
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(dir.search_calls().is_empty());
    assert!(srx.try_recv().is_err());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(dir.search_calls(), vec!["Ra".to_string()]);
}

#[tokio::test(start_paused = true)]
/// What: A query cleared inside the window finishes empty without touching the network.
async fn cleared_query_skips_network() {
    let dir = Arc::new(FakeDirectory::default());
    let (qtx, qrx) = mpsc::unbounded_channel();
    let (stx, mut srx) = mpsc::unbounded_channel();
    let _handle = spawn_search_worker(Arc::clone(&dir), qrx, stx, DEBOUNCE);

    qtx.send(query(1, "Jane")).expect("send");
    tokio::time::sleep(Duration::from_millis(50)).await;
    qtx.send(query(2, "")).expect("send");

    assert_eq!(
        next_event(&mut srx).await,
        SearchEvent::Finished {
            id: 2,
            result: Ok(Vec::new()),
        }
    );
    assert!(dir.search_calls().is_empty());
}

#[tokio::test(start_paused = true)]
/// What: Separate bursts each get their own request, tagged with their own id.
async fn separate_bursts_each_search() {
    let dir = Arc::new(FakeDirectory {
        latency: Duration::from_millis(500),
        ..FakeDirectory::default()
    });
    let (qtx, qrx) = mpsc::unbounded_channel();
    let (stx, mut srx) = mpsc::unbounded_channel();
    let _handle = spawn_search_worker(Arc::clone(&dir), qrx, stx, DEBOUNCE);

    qtx.send(query(1, "Jane")).expect("send");
    assert_eq!(next_event(&mut srx).await, SearchEvent::Started { id: 1 });
    qtx.send(query(2, "Jane Doe")).expect("send");

    let mut finished = Vec::new();
    let mut started = Vec::new();
    while finished.len() < 2 {
        match next_event(&mut srx).await {
            SearchEvent::Started { id } => started.push(id),
            SearchEvent::Finished { id, .. } => finished.push(id),
        }
    }
    assert_eq!(started, vec![2]);
    assert_eq!(finished, vec![1, 2]);
    assert_eq!(
        dir.search_calls(),
        vec!["Jane".to_string(), "Jane Doe".to_string()]
    );
}

#[tokio::test(start_paused = true)]
/// What: Dropping the query sender stops the worker and aborts the in-flight search.
async fn teardown_aborts_in_flight_search() {
    let dir = Arc::new(FakeDirectory {
        latency: Duration::from_secs(5),
        ..FakeDirectory::default()
    });
    let (qtx, qrx) = mpsc::unbounded_channel();
    let (stx, mut srx) = mpsc::unbounded_channel();
    let handle = spawn_search_worker(Arc::clone(&dir), qrx, stx, DEBOUNCE);

    qtx.send(query(1, "Jane")).expect("send");
    assert_eq!(next_event(&mut srx).await, SearchEvent::Started { id: 1 });
    drop(qtx);
    handle.await.expect("worker did not panic");
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(srx.try_recv().is_err());
}
