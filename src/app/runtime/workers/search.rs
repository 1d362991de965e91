use std::sync::Arc;

use tokio::{
    select,
    sync::mpsc,
    task::{JoinHandle, JoinSet},
    time::{Duration, sleep},
};

use crate::sources::AlumniDirectory;
use crate::state::{QueryInput, SearchEvent};

/// What: Spawn background worker for search queries.
///
/// Inputs:
/// - `directory`: Directory service used for the search call
/// - `query_rx`: Channel receiver for search queries
/// - `search_tx`: Channel sender for search progress and results
/// - `debounce`: Quiet window after the last query before a request is sent
///
/// Output:
/// - Handle of the worker task.
///
/// Details:
/// - Debounces queries: only the last query of a burst is searched.
/// - Blank queries finish immediately with no results and no network call.
/// - Emits `Started` right before a request and `Finished` when it settles; both carry the
///   query id so the event loop can drop superseded responses.
/// - In-flight requests are aborted when the worker exits.
pub fn spawn_search_worker<D: AlumniDirectory>(
    directory: Arc<D>,
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    search_tx: mpsc::UnboundedSender<SearchEvent>,
    debounce: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut in_flight = JoinSet::new();
        loop {
            let Some(mut latest) = query_rx.recv().await else {
                break;
            };
            loop {
                select! { Some(new_q) = query_rx.recv() => { latest = new_q; } () = sleep(debounce) => { break; } }
            }
            while in_flight.try_join_next().is_some() {}

            if latest.text.trim().is_empty() {
                let _ = search_tx.send(SearchEvent::Finished {
                    id: latest.id,
                    result: Ok(Vec::new()),
                });
                continue;
            }

            tracing::debug!(query_id = latest.id, query = %latest.text, "[Search] Sending search");
            let _ = search_tx.send(SearchEvent::Started { id: latest.id });
            let dir = Arc::clone(&directory);
            let tx = search_tx.clone();
            in_flight.spawn(async move {
                let QueryInput { id, text } = latest;
                let result = dir.search(text).await;
                let _ = tx.send(SearchEvent::Finished { id, result });
            });
        }
        in_flight.abort_all();
    })
}
