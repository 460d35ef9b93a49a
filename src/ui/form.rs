// Id input and lookup result rendering.

use ratatui::{prelude::*, widgets::*};

use crate::api::EntityKind;
use crate::app::App;
use crate::state::{FormState, LoadingState, Lookup};

use super::console::format_relative_time;

/// Draw the id input box with a cursor.
pub fn draw_input(frame: &mut Frame, form: &FormState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Post number ");

    let input_line = Line::from(vec![
        Span::styled("Id: ", Style::default().fg(Color::DarkGray)),
        Span::raw(form.input.as_str()),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]);

    frame.render_widget(Paragraph::new(input_line).block(block), area);
}

/// Draw the validation message when the last submission was not a number.
pub fn draw_validation(frame: &mut Frame, form: &FormState, area: Rect) {
    if !form.invalid_input {
        return;
    }
    let text = Paragraph::new(" Please enter a numeric post id")
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Draw the post and its author, or the loading / error state.
pub fn draw_result(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Post ");

    let placeholder = |text: String, color: Color| {
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
    };

    let widget = match &app.form.result {
        LoadingState::Idle => placeholder(
            "Type a post number and press Enter".to_string(),
            Color::DarkGray,
        ),
        LoadingState::Loading => placeholder("⏳ Loading...".to_string(), Color::Yellow),
        LoadingState::Error(e) => placeholder(format!("❌ {}", e), Color::Red),
        LoadingState::Loaded(lookup) => Paragraph::new(result_lines(app, lookup))
            .wrap(Wrap { trim: true }),
    };

    frame.render_widget(widget.block(block), area);
}

fn result_lines<'a>(app: &App, lookup: &'a Lookup) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(
            lookup.post.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(lookup.post.body.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            lookup.byline(),
            Style::default().fg(Color::Cyan),
        )),
    ];

    if let Some(cached_at) = app.service.cached_at(EntityKind::Post, lookup.post.id) {
        lines.push(Line::from(Span::styled(
            format!("cached {}", format_relative_time(&cached_at)),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}
