use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::{sync::mpsc, task::JoinHandle, time::Duration};

/// Interval between ticks driving persistence flushes.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// What: Spawn the tick worker.
///
/// Output:
/// - Handle of the task; it stops on its own once the receiver is dropped.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    })
}

/// What: Spawn event reading thread for terminal input.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread
/// - `event_tx`: Channel sender for terminal events
/// - `event_thread_cancelled`: Atomic flag to signal thread cancellation
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is observed promptly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !event_thread_cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        // transient read error
                        continue;
                    };
                    if event_thread_cancelled.load(Ordering::Relaxed) {
                        break;
                    }
                    // Receiver dropped on exit.
                    if event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
        tracing::debug!("[Runtime] Event thread stopped");
    });
}
