//! Feed worker against an in-memory directory.

use std::sync::Arc;
use std::time::Duration;

use alumni_tui::app::spawn_feed_worker;
use alumni_tui::state::{FeedController, PageRequest};
use tokio::sync::mpsc;

use crate::fake_directory::{FakeDirectory, page};

#[tokio::test]
/// What: Each request reaches the directory with its exclusions and is answered under its id.
async fn worker_answers_requests_in_order() {
    let dir = Arc::new(FakeDirectory::with_pages(vec![
        Ok(page(0, 20, 5)),
        Ok(page(20, 5, 0)),
    ]));
    let (page_tx, page_rx) = mpsc::unbounded_channel();
    let (res_tx, mut res_rx) = mpsc::unbounded_channel();
    let handle = spawn_feed_worker(Arc::clone(&dir), page_rx, res_tx);

    let mut feed = FeedController::default();
    for _ in 0..2 {
        let req = feed.begin_fetch(false).expect("idle");
        page_tx.send(req).expect("worker alive");
        let outcome = tokio::time::timeout(Duration::from_secs(2), res_rx.recv())
            .await
            .expect("outcome in time")
            .expect("channel open");
        assert!(feed.apply(outcome));
    }
    assert_eq!(feed.items().len(), 25);
    assert!(feed.begin_fetch(false).is_err());

    let calls = dir.page_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].is_empty());
    assert_eq!(calls[1], (0..20).collect::<Vec<u64>>());

    drop(page_tx);
    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("worker exits when the request channel closes")
        .expect("worker did not panic");
}

#[tokio::test(start_paused = true)]
/// What: Closing the request channel cancels an in-flight call; nothing is delivered late.
async fn teardown_cancels_in_flight_request() {
    let dir = Arc::new(FakeDirectory {
        latency: Duration::from_secs(5),
        ..FakeDirectory::with_pages(vec![Ok(page(0, 20, 5))])
    });
    let (page_tx, page_rx) = mpsc::unbounded_channel::<PageRequest>();
    let (res_tx, mut res_rx) = mpsc::unbounded_channel();
    let handle = spawn_feed_worker(Arc::clone(&dir), page_rx, res_tx);

    page_tx
        .send(PageRequest {
            id: 1,
            excluded: Vec::new(),
        })
        .expect("worker alive");
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(dir.page_calls().len(), 1);

    drop(page_tx);
    handle.await.expect("worker did not panic");
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(res_rx.try_recv().is_err());
}
