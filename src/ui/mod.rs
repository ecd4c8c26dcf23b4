//! UI module for rendering the TUI

mod components;
mod debug_panel;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header);
    forms::draw_lead_form(frame, screen.form, app);
    debug_panel::draw(frame, screen.debug, app);
    layout::draw_status_bar(frame, screen.status_bar, app);
}
