use std::sync::Arc;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::events::{EventSinks, handle_event};
use crate::logic::{request_next_page, send_query};
use crate::sources::HttpDirectory;
use crate::state::AppState;
use crate::ui::ui;

use super::persist::maybe_flush_sidebar;
use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod cleanup;
pub mod handlers;
pub mod init;
pub mod workers;

use background::{spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use cleanup::cleanup_on_exit;
use handlers::{handle_page_outcome, handle_search_event};
use init::initialize_app_state;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Startup choices taken from the command line.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Directory endpoint overriding `base_url` from `settings.conf`.
    pub base_url: Option<String>,
    /// Query typed into the search bar at startup.
    pub initial_search: Option<String>,
    /// Leave mouse capture off.
    pub no_mouse: bool,
}

/// What: Run the alumni browser end-to-end: initialize terminal and state, spawn the feed
/// and search workers, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `options`: Command-line overrides.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or client errors.
///
/// Details:
/// - The first page is requested on mount; later pages come from the near-end trigger.
/// - Headless mode (`ALUMNI_TUI_TEST_HEADLESS=1`) skips the terminal and the input thread.
/// - On exit the workers are aborted, which cancels in-flight requests, and the sidebar
///   flag is flushed.
pub async fn run(options: RunOptions) -> Result<()> {
    let headless = crate::util::is_headless();

    let mut settings = crate::theme::settings();
    if let Some(url) = options.base_url.as_deref() {
        let url = url.trim().trim_end_matches('/');
        if !url.is_empty() {
            settings.base_url = url.to_string();
        }
    }

    let directory = Arc::new(HttpDirectory::new(
        &settings.base_url,
        Duration::from_secs(settings.request_timeout_secs),
    )?);

    if !headless {
        setup_terminal(!options.no_mouse)?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    initialize_app_state(&mut app, &settings);

    let mut channels = Channels::new(
        directory,
        Duration::from_millis(settings.search_debounce_ms),
    );
    let tick_handle = spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    // Initial mount
    request_next_page(&mut app, &channels.page_tx);
    if let Some(q) = options.initial_search.filter(|q| !q.trim().is_empty()) {
        send_query(&mut app, q, &channels.query_tx);
    }

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                let sinks = EventSinks {
                    query_tx: &channels.query_tx,
                    page_tx: &channels.page_tx,
                };
                if handle_event(ev, &mut app, &sinks) {
                    break;
                }
            }
            Some(outcome) = channels.page_res_rx.recv() => {
                handle_page_outcome(&mut app, outcome, &channels.page_tx);
            }
            Some(event) = channels.search_rx.recv() => {
                handle_search_event(&mut app, event);
            }
            Some(()) = channels.tick_rx.recv() => {
                maybe_flush_sidebar(&mut app);
            }
            else => break,
        }
    }

    tick_handle.abort();
    cleanup_on_exit(&mut app, &channels);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
