// UI module for rendering the TUI.
// Lays out the header, id form, lookup result, activity log and status bar.

mod console;
mod form;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Length(3),  // Id input
            Constraint::Length(1),  // Validation message
            Constraint::Min(6),     // Lookup result
            Constraint::Length(10), // Activity log
            Constraint::Length(1),  // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    form::draw_input(frame, &app.form, chunks[1]);
    form::draw_validation(frame, &app.form, chunks[2]);
    form::draw_result(frame, app, chunks[3]);
    console::draw_activity(frame, &app.console, chunks[4]);
    draw_status_bar(frame, app, chunks[5]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " postie ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.api_url.as_str(), Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar with keybinding hints and cache counters.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.service.cache_stats();

    let hints = vec![
        Span::raw(" ↵ "),
        Span::styled("Fetch", Style::default().fg(Color::DarkGray)),
        Span::raw("  ⌫ "),
        Span::styled("Delete", Style::default().fg(Color::DarkGray)),
        Span::raw("  Esc "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(
                "  posts: {} cached, {} hits / {} misses",
                stats.posts.entries, stats.posts.hits, stats.posts.misses
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(
                "  users: {} cached, {} hits / {} misses",
                stats.users.entries, stats.users.hits, stats.users.misses
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
