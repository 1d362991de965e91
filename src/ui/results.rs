use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::logic::{DisplaySource, display_source, displayed_items};
use crate::state::{AlumniRecord, AppState, Focus};
use crate::theme::{Theme, theme};
use crate::util::fit_width;

use super::helpers::batch_label;

/// Lines used by one card in the list.
const CARD_HEIGHT: u16 = 2;

/// What: Build the two-line card for one alumnus.
fn card(r: &AlumniRecord, th: &Theme, width: usize) -> ListItem<'static> {
    let mut head = vec![
        Span::styled(
            fit_width(&r.name, width.saturating_sub(14)),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(batch_label(r.batch), Style::default().fg(th.sapphire)),
    ];
    if r.name.is_empty() {
        head[0] = Span::styled("(unnamed)", Style::default().fg(th.overlay1));
    }
    let mut tail = vec![
        Span::raw("  "),
        Span::styled(r.company.clone(), Style::default().fg(th.subtext0)),
    ];
    if !r.field.is_empty() {
        tail.push(Span::raw("  "));
        tail.push(Span::styled(format!("[{}]", r.field), Style::default().fg(th.green)));
    }
    if let Some(branch) = r.branch.as_deref().filter(|b| !b.is_empty()) {
        tail.push(Span::raw(" "));
        tail.push(Span::styled(format!("[{branch}]"), Style::default().fg(th.mauve)));
    }
    ListItem::new(vec![Line::from(head), Line::from(tail)])
}

/// What: Render the alumni list: the feed, or the search results when they take over.
///
/// Details:
/// - Updates `list_viewport_rows` so page navigation moves by one screen of cards.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Results);
    let source = display_source(app);
    let width = usize::from(area.width.saturating_sub(4));
    let items: Vec<ListItem> = displayed_items(app)
        .iter()
        .map(|r| card(r, &th, width))
        .collect();
    let count = items.len();
    app.list_viewport_rows = area.height.saturating_sub(2) / CARD_HEIGHT;
    app.clamp_selection(count);

    let title = match source {
        DisplaySource::Feed => format!("Alumni ({count})"),
        DisplaySource::Search => format!("Search results ({count})"),
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 }));

    if count == 0 {
        let msg = match source {
            DisplaySource::Search => "No alumni match this search.",
            DisplaySource::Feed if app.feed.is_loading() => "Loading alumni…",
            DisplaySource::Feed => "No alumni loaded yet.",
        };
        let para = Paragraph::new(Line::from(Span::styled(
            msg,
            Style::default().fg(th.overlay1),
        )))
        .style(Style::default().bg(th.base))
        .block(block);
        f.render_widget(para, area);
        return;
    }

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}
