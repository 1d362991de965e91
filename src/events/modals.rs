use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};

/// What: Handle a key while a modal is open.
///
/// Details:
/// - Esc/Enter close every modal; `q` also closes details and help.
/// - In the details modal `o` opens the profile, `l` the `LinkedIn` page, `w` the website.
pub fn handle_modal_key(ke: KeyEvent, app: &mut AppState) {
    let close = match &app.modal {
        Modal::Details { record } => match ke.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => true,
            KeyCode::Char('o') => {
                crate::util::open_url(&record.profile_url);
                false
            }
            KeyCode::Char('l') => {
                if let Some(url) = record.linkedin.as_deref() {
                    crate::util::open_url(url);
                }
                false
            }
            KeyCode::Char('w') => {
                if let Some(url) = record.website.as_deref() {
                    crate::util::open_url(url);
                }
                false
            }
            _ => false,
        },
        Modal::Help => matches!(ke.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')),
        Modal::Alert { .. } => matches!(ke.code, KeyCode::Esc | KeyCode::Enter),
        Modal::None => false,
    };
    if close {
        app.modal = Modal::None;
    }
}
