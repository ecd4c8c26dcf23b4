//! Debug panel: webhook target, last response and a live form preview

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Shown in place of an unset webhook URL
const MISSING_URL: &str = "PASTE_YOUR_URL_HERE";

/// Draw the debug panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Debug ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),          // Subtitle
            Constraint::Length(3),          // Webhook URL
            Constraint::Percentage(45),     // Last response
            Constraint::Min(5),             // Payload preview
        ])
        .split(inner);

    let subtitle = Paragraph::new("Raw response from the webhook, for demos and testing.")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(subtitle, chunks[0]);

    let url = if app.state.webhook_url.is_empty() {
        Span::styled(MISSING_URL, Style::default().fg(Color::Red))
    } else {
        Span::styled(&app.state.webhook_url, Style::default().fg(Color::Blue))
    };
    frame.render_widget(
        Paragraph::new(Line::from(url)).block(section("Webhook URL")),
        chunks[1],
    );

    let last_response = match app.state.last_response() {
        Some(value) => pretty_json(value),
        None => "(none yet)".to_string(),
    };
    frame.render_widget(
        Paragraph::new(last_response)
            .block(section("Last Response"))
            .wrap(Wrap { trim: false }),
        chunks[2],
    );

    let preview = serde_json::to_value(app.state.form())
        .map(|value| pretty_json(&value))
        .unwrap_or_else(|e| format!("(preview unavailable: {e})"));
    frame.render_widget(
        Paragraph::new(preview)
            .block(section("Current Payload Preview"))
            .wrap(Wrap { trim: false }),
        chunks[3],
    );
}

fn section(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
