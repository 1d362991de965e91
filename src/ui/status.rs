use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::logic::{DisplaySource, display_source};
use crate::state::{AppState, FeedPhase};
use crate::theme::theme;

/// What: One-line status for the feed (loading, exhausted, last failure).
///
/// Details:
/// - Hidden while the search overlay owns the list; pagination is paused then.
pub fn render_status(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = if display_source(app) == DisplaySource::Search {
        Line::from(Span::styled(
            "Showing search results (Esc to return to the directory)",
            Style::default().fg(th.overlay1),
        ))
    } else if let Some(err) = app.feed.last_error() {
        Line::from(Span::styled(
            format!("Failed to load alumni: {err} (scroll to retry)"),
            Style::default().fg(th.red),
        ))
    } else {
        match app.feed.phase() {
            FeedPhase::Loading => Line::from(Span::styled(
                "Loading more alumni…",
                Style::default().fg(th.sapphire),
            )),
            FeedPhase::Exhausted => Line::from(Span::styled(
                "No more alumni to load",
                Style::default().fg(th.overlay1),
            )),
            FeedPhase::Idle => Line::from(""),
        }
    };
    f.render_widget(Paragraph::new(line).style(Style::default().bg(th.base)), area);
}

/// What: Key hints for the current focus.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let hints = match app.focus {
        crate::state::Focus::Search => {
            "Type to search · ↑/↓ move · Enter details · Esc clear · Tab list · Ctrl+B sidebar · F1 help"
        }
        crate::state::Focus::Results => {
            "j/k move · Enter details · o open profile · / search · Ctrl+B sidebar · ? help · q quit"
        }
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(th.subtext1),
        )))
        .style(Style::default().bg(th.mantle)),
        area,
    );
}
