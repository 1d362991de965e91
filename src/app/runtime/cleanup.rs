use std::sync::atomic::Ordering;

use crate::app::persist::maybe_flush_sidebar;
use crate::state::AppState;

use super::channels::Channels;

/// What: Tear down background work and flush pending writes on exit.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels and worker handles
///
/// Details:
/// - Aborting a worker drops its `JoinSet`, which aborts every in-flight request.
/// - Any pending page request is abandoned so nothing is treated as still loading.
pub fn cleanup_on_exit(app: &mut AppState, channels: &Channels) {
    tracing::debug!("[Runtime] Main loop exited, stopping workers");
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    for handle in &channels.workers {
        handle.abort();
    }
    app.feed.abandon_pending();
    maybe_flush_sidebar(app);
}
