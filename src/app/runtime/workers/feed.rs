use std::sync::Arc;

use tokio::{select, sync::mpsc, task::JoinHandle, task::JoinSet};

use crate::sources::AlumniDirectory;
use crate::state::{PageOutcome, PageRequest};

/// What: Spawn background worker for paginated listing requests.
///
/// Inputs:
/// - `directory`: Directory service used for the listing call
/// - `page_rx`: Channel receiver for page requests from the event loop
/// - `page_res_tx`: Channel sender for page outcomes
///
/// Output:
/// - Handle of the worker task; aborting it also aborts every in-flight request.
///
/// Details:
/// - Each request runs as its own task tracked in a `JoinSet`.
/// - When `page_rx` closes the worker exits and drops the set, cancelling pending calls so
///   no late outcome reaches a torn-down view.
pub fn spawn_feed_worker<D: AlumniDirectory>(
    directory: Arc<D>,
    mut page_rx: mpsc::UnboundedReceiver<PageRequest>,
    page_res_tx: mpsc::UnboundedSender<PageOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut in_flight = JoinSet::new();
        loop {
            select! {
                req = page_rx.recv() => {
                    let Some(req) = req else {
                        break;
                    };
                    let dir = Arc::clone(&directory);
                    let tx = page_res_tx.clone();
                    in_flight.spawn(async move {
                        let result = dir.fetch_next_page(req.excluded).await;
                        let _ = tx.send(PageOutcome { id: req.id, result });
                    });
                }
                Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
            }
        }
        tracing::debug!(
            pending = in_flight.len(),
            "[Feed] Worker stopping, aborting in-flight requests"
        );
        in_flight.abort_all();
    })
}
