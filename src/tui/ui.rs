// Rendering - draws the whole frame each pass
//
// Layout, top to bottom: hero banner with the animated word, the comment
// list, the submission form with its note line, an optional logs panel,
// and the status bar.

use super::app::{App, Focus};
use crate::board::{markup, NoteKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Block cursor appended to the animated word
const CURSOR: &str = "▌";

/// Draw the full UI
pub fn draw(f: &mut Frame, app: &App) {
    let logs_height = if app.show_logs { 8 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Hero banner
            Constraint::Min(5),              // Comment list
            Constraint::Length(7),           // Submission form
            Constraint::Length(logs_height), // Logs panel (optional)
            Constraint::Length(1),           // Status bar
        ])
        .split(f.area());

    draw_hero(f, chunks[0], app);
    draw_comments(f, chunks[1], app);
    draw_form(f, chunks[2], app);
    if app.show_logs {
        draw_logs(f, chunks[3], app);
    }
    draw_status_bar(f, chunks[4], app);
}

/// Hero banner: fixed lead-in plus the animated word and cursor
fn draw_hero(f: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            "DISCOVER NEW ",
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.type_text.as_str(),
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(CURSOR, Style::default().fg(app.theme.accent)),
    ]);

    let hero = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(hero, area);
}

/// Comment list, newest first, with the placeholder entry when empty
fn draw_comments(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = if app.comments.is_empty() {
        vec![ListItem::new(Span::styled(
            markup::EMPTY_PLACEHOLDER,
            Style::default().fg(app.theme.muted),
        ))]
    } else {
        app.comments
            .iter()
            .skip(app.scroll_offset)
            .map(|c| {
                let header = Line::from(vec![
                    Span::styled(
                        c.email.as_str(),
                        Style::default()
                            .fg(app.theme.title)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        markup::format_time(c.time),
                        Style::default().fg(app.theme.muted),
                    ),
                ]);
                let body = Line::from(Span::raw(c.text.as_str()));
                ListItem::new(Text::from(vec![header, body]))
            })
            .collect()
    };

    let title = format!(" Comments ({}) ", app.comments.len());
    let border = if app.focus == Focus::List {
        app.theme.accent
    } else {
        app.theme.border
    };
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(list, area);
}

/// Submission form: email and comment inputs plus the note line
fn draw_form(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.focus == Focus::Email || app.focus == Focus::Comment;
    let border = if editing {
        app.theme.accent
    } else {
        app.theme.border
    };

    let mut lines = vec![
        input_line(app, "Email:   ", &app.email_input, Focus::Email),
        input_line(app, "Comment: ", &app.comment_input, Focus::Comment),
        Line::raw(""),
    ];

    // The note carries one of two indicator styles: success or warning
    lines.push(match app.board.note() {
        Some(note) => {
            let color = match note.kind {
                NoteKind::Success => app.theme.success,
                NoteKind::Warning => app.theme.warning,
            };
            Line::from(Span::styled(
                note.text.as_str(),
                Style::default().fg(color),
            ))
        }
        None => Line::from(Span::styled(
            "Tab to edit, Enter to post",
            Style::default().fg(app.theme.muted),
        )),
    });

    let form = Paragraph::new(lines).block(
        Block::default()
            .title(" Leave a comment ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(form, area);
}

/// One labelled input line; the focused input shows a block cursor
fn input_line<'a>(app: &'a App, label: &'a str, value: &'a str, field: Focus) -> Line<'a> {
    let focused = app.focus == field;
    let mut spans = vec![
        Span::styled(label, Style::default().fg(app.theme.title)),
        Span::styled(
            value,
            if focused {
                Style::default().fg(app.theme.accent)
            } else {
                Style::default().fg(app.theme.muted)
            },
        ),
    ];
    if focused {
        spans.push(Span::styled(CURSOR, Style::default().fg(app.theme.accent)));
    }
    Line::from(spans)
}

/// Recent log entries from the in-memory buffer
fn draw_logs(f: &mut Frame, area: Rect, app: &App) {
    let entries = app.log_buffer.get_all();
    let visible = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = entries
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|e| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", e.timestamp.format("%H:%M:%S")),
                    Style::default().fg(app.theme.muted),
                ),
                Span::styled(
                    format!("{:5} ", e.level.as_str()),
                    Style::default().fg(app.theme.title),
                ),
                Span::raw(e.message.as_str()),
            ])
        })
        .collect();

    let logs = Paragraph::new(lines).block(
        Block::default()
            .title(" Logs ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(logs, area);
}

/// Status bar: uptime, comment count, blob location, key hints
fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let text = format!(
        " {} │ {} comment(s) │ {} │ Tab focus · Enter post · x clear · l logs · q quit",
        app.uptime(),
        app.comments.len(),
        app.board.store().path().display(),
    );

    let status = Paragraph::new(text).style(Style::default().fg(app.theme.status_bar));
    f.render_widget(status, area);
}
