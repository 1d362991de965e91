//! Event handling layer for the TUI.
//!
//! `handle_event` routes keys to the open modal first, then to global shortcuts, then to
//! the focused pane; mouse wheel events scroll the list.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, Focus, Modal, PageRequest, QueryInput};

mod modals;
mod mouse;
mod results;
mod search;

/// Channels the handlers may write to.
pub struct EventSinks<'a> {
    /// Debounced search worker.
    pub query_tx: &'a mpsc::UnboundedSender<QueryInput>,
    /// Feed worker.
    pub page_tx: &'a mpsc::UnboundedSender<PageRequest>,
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState, sinks: &EventSinks<'_>) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            handle_key(ke, app, sinks)
        }
        CEvent::Mouse(me) => {
            mouse::handle_mouse_event(me, app, sinks);
            false
        }
        _ => false,
    }
}

/// What: Route one key press.
fn handle_key(ke: KeyEvent, app: &mut AppState, sinks: &EventSinks<'_>) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(ke.code, KeyCode::Char('c' | 'q')) {
        return true;
    }
    if app.modal.is_open() {
        modals::handle_modal_key(ke, app);
        return false;
    }
    if ctrl && ke.code == KeyCode::Char('b') {
        app.toggle_sidebar();
        return false;
    }
    match ke.code {
        KeyCode::F(1) => {
            app.modal = Modal::Help;
            return false;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Search => Focus::Results,
                Focus::Results => Focus::Search,
            };
            return false;
        }
        _ => {}
    }
    match app.focus {
        Focus::Search => search::handle_search_key(ke, app, sinks),
        Focus::Results => results::handle_results_key(ke, app, sinks),
    }
}

/// Rows moved by PageUp/PageDown given the last rendered list height.
fn page_step(app: &AppState) -> isize {
    isize::try_from(app.list_viewport_rows.saturating_sub(1).max(1)).unwrap_or(1)
}

/// What: Open the details modal for the selected displayed record, if any.
fn open_details(app: &mut AppState) {
    if let Some(record) = crate::logic::displayed_items(app).get(app.selected).cloned() {
        tracing::debug!(key = %record.identity_key(app.selected), "[UI] Opening details");
        app.modal = Modal::Details {
            record: Box::new(record),
        };
    }
}
