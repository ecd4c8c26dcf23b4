//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `lead_form`: The lead intake form

mod field_renderer;
mod lead_form;

pub use lead_form::draw as draw_lead_form;
