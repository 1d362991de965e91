use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AlumniRecord, AppState, Modal};
use crate::theme::{Theme, theme};

use super::helpers::{batch_label, centered_rect};

/// What: Draw the open modal, if any, over `area`.
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Details { record } => render_details(f, record, area),
        Modal::Help => render_help(f, area),
        Modal::Alert { message } => render_alert(f, message, area),
    }
}

/// What: Labeled line, skipped by the caller when the value is missing.
fn field<'a>(th: &Theme, label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(th.overlay2)),
        Span::styled(value.to_string(), Style::default().fg(th.text)),
    ])
}

/// What: Full profile of one alumnus.
fn render_details(f: &mut Frame, r: &AlumniRecord, area: Rect) {
    let th = theme();
    let rect = centered_rect(area, 76, 22);
    f.render_widget(Clear, rect);

    let mut lines = vec![
        Line::from(Span::styled(
            r.name.clone(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(r.company.clone(), Style::default().fg(th.subtext0)),
            Span::raw("  "),
            Span::styled(batch_label(r.batch), Style::default().fg(th.sapphire)),
        ]),
        Line::from(""),
    ];
    if let Some(bio) = r.bio.as_deref().filter(|b| !b.is_empty()) {
        lines.push(Line::from(Span::styled(
            "About",
            Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            bio.to_string(),
            Style::default().fg(th.subtext1),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Contact",
        Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
    )));
    lines.push(field(&th, "Email", &r.email));
    let optional = [
        ("Phone", r.phone.as_deref()),
        ("Location", r.location.as_deref()),
    ];
    for (label, value) in optional {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            lines.push(field(&th, label, v));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Professional",
        Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
    )));
    lines.push(field(&th, "Field", &r.field));
    if let Some(branch) = r.branch.as_deref().filter(|b| !b.is_empty()) {
        lines.push(field(&th, "Branch", branch));
    }
    lines.push(field(&th, "Profile", &r.profile_url));
    if let Some(url) = r.linkedin.as_deref().filter(|u| !u.is_empty()) {
        lines.push(field(&th, "LinkedIn", url));
    }
    if let Some(url) = r.website.as_deref().filter(|u| !u.is_empty()) {
        lines.push(field(&th, "Website", url));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "o open profile · l LinkedIn · w website · Esc close",
        Style::default().fg(th.overlay1),
    )));

    let block = Block::default()
        .title(Span::styled(
            "Alumni Details",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(th.mauve));
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .style(Style::default().bg(th.mantle))
            .block(block),
        rect,
    );
}

/// What: Keybinding overview.
fn render_help(f: &mut Frame, area: Rect) {
    let th = theme();
    let rect = centered_rect(area, 64, 18);
    f.render_widget(Clear, rect);
    let rows = [
        ("Tab", "switch between search and list"),
        ("↑/↓  j/k", "move selection"),
        ("PgUp/PgDn", "move by one screen"),
        ("g/G", "first / last alumnus"),
        ("Enter", "show details"),
        ("o", "open profile in browser"),
        ("/", "focus search"),
        ("Esc", "clear search / close dialog"),
        ("Ctrl+U", "clear search input"),
        ("Ctrl+B", "toggle sidebar"),
        ("q  Ctrl+C", "quit"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(k, d)| {
            Line::from(vec![
                Span::styled(
                    format!("{k:<12}"),
                    Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*d, Style::default().fg(th.text)),
            ])
        })
        .collect();
    let block = Block::default()
        .title(Span::styled("Help", Style::default().fg(th.mauve)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.mauve));
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(th.mantle))
            .block(block),
        rect,
    );
}

/// What: One-line notice.
fn render_alert(f: &mut Frame, message: &str, area: Rect) {
    let th = theme();
    let rect = centered_rect(area, area.width.saturating_sub(10).min(80), 7);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled("Notice", Style::default().fg(th.yellow)))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(th.yellow));
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(message.to_string(), Style::default().fg(th.text))),
            Line::from(""),
            Line::from(Span::styled("Enter/Esc to close", Style::default().fg(th.overlay1))),
        ])
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(th.mantle))
        .block(block),
        rect,
    );
}
