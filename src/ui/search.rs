use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// What: Render the search input with its advisory line.
///
/// Details:
/// - The title shows a spinner label while a search for the current query is in flight.
/// - The cursor is placed after the query when the input has focus.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Search);
    let query = app.search.query();

    let input_line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            query.to_string(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let advisory_line = app.search.advisory().map_or_else(
        || Line::from(""),
        |adv| {
            Line::from(Span::styled(
                adv.message(),
                Style::default().fg(th.yellow).add_modifier(Modifier::ITALIC),
            ))
        },
    );

    let title = if app.search.is_searching() {
        "Search (searching…)"
    } else if focused {
        "Search (focused)"
    } else {
        "Search"
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 }));
    let para = Paragraph::new(vec![input_line, advisory_line])
        .style(Style::default().bg(th.base))
        .block(block);
    f.render_widget(para, area);

    if focused && area.width > 4 && area.height > 2 {
        let offset = u16::try_from(query.width() + 2).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(offset);
        let max_x = area.x + area.width.saturating_sub(2);
        f.set_cursor_position(Position::new(x.min(max_x), area.y + 1));
    }
}
