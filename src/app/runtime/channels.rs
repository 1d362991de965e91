use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::sources::AlumniDirectory;
use crate::state::{PageOutcome, PageRequest, QueryInput, SearchEvent};

use super::workers::{spawn_feed_worker, spawn_search_worker};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used for communication
///   between the main event loop and background workers
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub query_tx: mpsc::UnboundedSender<QueryInput>,
    pub search_rx: mpsc::UnboundedReceiver<SearchEvent>,
    pub page_tx: mpsc::UnboundedSender<PageRequest>,
    pub page_res_rx: mpsc::UnboundedReceiver<PageOutcome>,
    pub tick_tx: mpsc::UnboundedSender<()>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    /// Feed and search worker tasks, aborted on exit.
    pub workers: Vec<JoinHandle<()>>,
}

impl Channels {
    /// What: Create all channels and spawn the feed and search workers.
    ///
    /// Inputs:
    /// - `directory`: Directory service shared by both workers
    /// - `debounce`: Quiet window for the search worker
    ///
    /// Output:
    /// - Returns a `Channels` struct with all senders and receivers initialized
    pub fn new<D: AlumniDirectory>(directory: Arc<D>, debounce: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryInput>();
        let (search_tx, search_rx) = mpsc::unbounded_channel::<SearchEvent>();
        let (page_tx, page_rx) = mpsc::unbounded_channel::<PageRequest>();
        let (page_res_tx, page_res_rx) = mpsc::unbounded_channel::<PageOutcome>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();

        let workers = vec![
            spawn_feed_worker(Arc::clone(&directory), page_rx, page_res_tx),
            spawn_search_worker(directory, query_rx, search_tx, debounce),
        ];

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            query_tx,
            search_rx,
            page_tx,
            page_res_rx,
            tick_tx,
            tick_rx,
            workers,
        }
    }
}
