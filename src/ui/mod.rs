//! TUI rendering for the alumni browser.
//!
//! Layout: optional sidebar on the left; search bar, alumni list, status line, and
//! keybinds footer on the right; modals drawn last on top.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod helpers;
mod modals;
mod results;
mod search;
mod sidebar;
mod status;

/// Width of the sidebar in columns.
const SIDEBAR_WIDTH: u16 = 30;

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; `list_state` and `list_viewport_rows` are updated.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let main = if app.sidebar_open && area.width > SIDEBAR_WIDTH * 2 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);
        sidebar::render_sidebar(f, app, cols[0]);
        cols[1]
    } else {
        area
    };

    let footer_h = u16::from(app.show_keybinds_footer);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(footer_h),
        ])
        .split(main);

    search::render_search(f, app, rows[0]);
    results::render_results(f, app, rows[1]);
    status::render_status(f, app, rows[2]);
    if app.show_keybinds_footer {
        status::render_footer(f, app, rows[3]);
    }

    modals::render_modal(f, app, area);
}
