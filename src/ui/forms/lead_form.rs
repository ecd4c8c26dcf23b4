//! Lead form rendering

use super::field_renderer::{draw_choice_field, draw_text_field};
use crate::app::App;
use crate::state::{FieldName, SubmissionStatus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

/// Draw the customer details card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;

    let block = Block::default()
        .title(" Customer Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner_height = if state.status().is_idle() { 0 } else { 3 };
    let hint_height = if state.validation().is_valid() { 0 } else { 2 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // Status banner
            Constraint::Length(FIELD_HEIGHT),  // Full name | ZIP
            Constraint::Length(FIELD_HEIGHT),  // Email | Phone
            Constraint::Length(FIELD_HEIGHT),  // Address
            Constraint::Length(FIELD_HEIGHT),  // Contact | Time
            Constraint::Length(FIELD_HEIGHT),  // Service
            Constraint::Min(4),                // Lead notes
            Constraint::Length(hint_height),   // Validation hint
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Fine print
        ])
        .split(inner);

    if banner_height > 0 {
        draw_status_banner(frame, chunks[0], state.status());
    }

    let [name_area, zip_area] = split_row(chunks[1]);
    draw_form_field(frame, name_area, app, FieldName::FullName);
    draw_form_field(frame, zip_area, app, FieldName::Zip);

    let [email_area, phone_area] = split_row(chunks[2]);
    draw_form_field(frame, email_area, app, FieldName::Email);
    draw_form_field(frame, phone_area, app, FieldName::Phone);

    draw_form_field(frame, chunks[3], app, FieldName::Address);

    let [contact_area, time_area] = split_row(chunks[4]);
    draw_form_field(frame, contact_area, app, FieldName::PreferredContact);
    draw_form_field(frame, time_area, app, FieldName::PreferredTime);

    draw_form_field(frame, chunks[5], app, FieldName::ServiceRequested);
    draw_form_field(frame, chunks[6], app, FieldName::LeadNotes);

    if hint_height > 0 {
        let hint = Paragraph::new(Line::from(vec![
            Span::styled(
                "Fix: ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                state.validation().errors().join(" "),
                Style::default().fg(Color::Yellow),
            ),
        ]))
        .wrap(Wrap { trim: true });
        frame.render_widget(hint, chunks[7]);
    }

    let loading = state.status().is_loading();
    let button_label = if loading { "Submitting..." } else { "Submit Lead" };
    render_button(
        frame,
        chunks[8],
        button_label,
        state.form().is_submit_active(),
        !loading,
        Color::Green,
    );

    let fine_print = Paragraph::new("* Required: Full Name, ZIP, and Email or Phone.")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(fine_print, chunks[9]);
}

fn split_row(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    [chunks[0], chunks[1]]
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, field: FieldName) {
    let form = app.state.form();
    let is_active = form.active_field_name() == Some(field);

    if field.is_choice() {
        draw_choice_field(
            frame,
            area,
            field.label(),
            &form.display_value(field),
            is_active,
        );
    } else {
        draw_text_field(
            frame,
            area,
            field.label(),
            form.text(field).unwrap_or_default(),
            field.placeholder(),
            is_active,
            field.is_multiline(),
        );
    }
}

/// Banner colored by outcome; hidden while idle
fn draw_status_banner(frame: &mut Frame, area: Rect, status: &SubmissionStatus) {
    let color = match status {
        SubmissionStatus::Idle => Color::DarkGray,
        SubmissionStatus::Loading => Color::Yellow,
        SubmissionStatus::Success(_) => Color::Green,
        SubmissionStatus::Error(_) => Color::Red,
    };

    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{}:", status.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(status.message()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    )
    .wrap(Wrap { trim: true });

    frame.render_widget(banner, area);
}
