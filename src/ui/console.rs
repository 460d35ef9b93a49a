// Activity log rendering.
// Shows recent service log messages, newest first.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::logging::{ConsoleLevel, ConsoleLog};

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

pub fn draw_activity(frame: &mut Frame, console: &ConsoleLog, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Activity ");
    let messages = console.messages();

    if messages.is_empty() {
        let text = Paragraph::new("No activity yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = messages
        .iter()
        .rev()
        .map(|msg| {
            let (icon, color) = match msg.level {
                ConsoleLevel::Error => ("❌", Color::Red),
                ConsoleLevel::Warn => ("⚠️", Color::Yellow),
                ConsoleLevel::Info => ("ℹ️", Color::Cyan),
            };

            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", icon)),
                Span::styled(
                    format_relative_time(&msg.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(msg.message.clone(), Style::default().fg(color)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
