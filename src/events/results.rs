use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{close_search, displayed_items, move_sel, select_first, select_last};
use crate::state::{AppState, Focus, Modal};

use super::{EventSinks, open_details, page_step};

/// What: Handle a key while the alumni list has focus.
///
/// Output:
/// - `true` when `q` requests exit.
///
/// Details:
/// - `j`/`k`/arrows move, `g`/`G`/Home/End jump, PageUp/PageDown move by a screen.
/// - Enter opens details, `o` opens the profile URL, `/` focuses search, `?` shows help.
pub fn handle_results_key(ke: KeyEvent, app: &mut AppState, sinks: &EventSinks<'_>) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => move_sel(app, 1, sinks.page_tx),
        KeyCode::Char('k') | KeyCode::Up => move_sel(app, -1, sinks.page_tx),
        KeyCode::PageDown => move_sel(app, page_step(app), sinks.page_tx),
        KeyCode::PageUp => move_sel(app, -page_step(app), sinks.page_tx),
        KeyCode::Char('g') | KeyCode::Home => select_first(app),
        KeyCode::Char('G') | KeyCode::End => select_last(app, sinks.page_tx),
        KeyCode::Enter => open_details(app),
        KeyCode::Char('o') => {
            let opened = displayed_items(app)
                .get(app.selected)
                .map(|record| crate::util::open_url(&record.profile_url));
            if opened == Some(false) {
                app.modal = Modal::Alert {
                    message: "This alumnus has no public profile link.".into(),
                };
            }
        }
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char('?') => app.modal = Modal::Help,
        KeyCode::Esc => {
            if app.search.is_active() {
                close_search(app, sinks.query_tx);
                select_first(app);
            }
        }
        _ => {}
    }
    false
}
