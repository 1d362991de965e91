use crossterm::event::{MouseEvent, MouseEventKind};

use crate::logic::move_sel;
use crate::state::AppState;

use super::EventSinks;

/// Rows moved per wheel notch.
const WHEEL_STEP: isize = 3;

/// What: Scroll the list with the mouse wheel.
///
/// Details:
/// - Ignored while a modal is open.
/// - Scrolling down near the end of the feed triggers the next page like keyboard moves do.
pub fn handle_mouse_event(me: MouseEvent, app: &mut AppState, sinks: &EventSinks<'_>) {
    if app.modal.is_open() {
        return;
    }
    match me.kind {
        MouseEventKind::ScrollDown => move_sel(app, WHEEL_STEP, sinks.page_tx),
        MouseEventKind::ScrollUp => move_sel(app, -WHEEL_STEP, sinks.page_tx),
        _ => {}
    }
}
