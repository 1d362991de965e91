use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{close_search, move_sel, select_first, send_query};
use crate::state::{AppState, Focus};

use super::{EventSinks, open_details, page_step};

/// What: Handle a key while the search input has focus.
///
/// Inputs:
/// - `ke`: Key event.
/// - `app`: Mutable application state.
/// - `sinks`: Worker channels.
///
/// Output:
/// - `false`; the search pane never requests exit.
///
/// Details:
/// - Characters and Backspace edit the query and re-send it; Ctrl+U clears it.
/// - Esc closes an active search, or moves focus to the list when there is none.
/// - Arrows and page keys still move the list selection.
pub fn handle_search_key(ke: KeyEvent, app: &mut AppState, sinks: &EventSinks<'_>) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Char('u') if ctrl => {
            if !app.search.query().is_empty() {
                send_query(app, String::new(), sinks.query_tx);
            }
        }
        KeyCode::Char(ch) if !ctrl => {
            let mut text = app.search.query().to_string();
            text.push(ch);
            send_query(app, text, sinks.query_tx);
        }
        KeyCode::Backspace => {
            let mut text = app.search.query().to_string();
            if text.pop().is_some() {
                send_query(app, text, sinks.query_tx);
            }
        }
        KeyCode::Esc => {
            if app.search.is_active() {
                close_search(app, sinks.query_tx);
                select_first(app);
            } else {
                app.focus = Focus::Results;
            }
        }
        KeyCode::Enter => open_details(app),
        KeyCode::Up => move_sel(app, -1, sinks.page_tx),
        KeyCode::Down => move_sel(app, 1, sinks.page_tx),
        KeyCode::PageUp => move_sel(app, -page_step(app), sinks.page_tx),
        KeyCode::PageDown => move_sel(app, page_step(app), sinks.page_tx),
        _ => {}
    }
    false
}
