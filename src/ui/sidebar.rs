use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::{AppState, FeedPhase};
use crate::theme::theme;

/// What: Navigation sidebar with directory statistics.
pub fn render_sidebar(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let label = Style::default().fg(th.overlay2);
    let value = Style::default().fg(th.text).add_modifier(Modifier::BOLD);
    let phase = match app.feed.phase() {
        FeedPhase::Idle => "idle",
        FeedPhase::Loading => "loading",
        FeedPhase::Exhausted => "complete",
    };
    let lines = vec![
        Line::from(Span::styled(
            "Alumni Directory",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Loaded:  ", label),
            Span::styled(app.feed.items().len().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Pages:   ", label),
            Span::styled(app.feed.pages_loaded().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Feed:    ", label),
            Span::styled(phase, value),
        ]),
        Line::from(vec![
            Span::styled("Matches: ", label),
            Span::styled(app.search.results().len().to_string(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled("Server", label)),
        Line::from(Span::styled(
            app.base_url.clone(),
            Style::default().fg(th.subtext0),
        )),
        Line::from(""),
        Line::from(Span::styled("Ctrl+B to hide", Style::default().fg(th.overlay1))),
    ];
    let block = Block::default()
        .title(Span::styled("Menu", Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(th.mantle))
            .block(block),
        area,
    );
}
