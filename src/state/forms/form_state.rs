//! Lead form state and the payload built from it

use super::field::{
    Choice, FieldError, FieldName, PreferredContact, PreferredTime, ServiceRequested,
};
use super::validation::normalize_phone;
use serde::Serialize;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Focus index of the submit button, one past the last field
pub const SUBMIT_BUTTON_INDEX: usize = FieldName::ALL.len();

/// The lead being entered.
///
/// Serializes with the same camelCase keys as the webhook payload, which is
/// what the debug panel previews.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub zip: String,
    pub address: String,
    pub preferred_contact: PreferredContact,
    pub preferred_time: PreferredTime,
    pub service_requested: ServiceRequested,
    pub lead_notes: String,
    #[serde(skip)]
    pub active_field_index: usize,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field under focus, `None` when the submit button has focus
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// Text value of a free-text field (`None` for option fields)
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FullName => Some(&self.full_name),
            FieldName::Zip => Some(&self.zip),
            FieldName::Email => Some(&self.email),
            FieldName::Phone => Some(&self.phone),
            FieldName::Address => Some(&self.address),
            FieldName::LeadNotes => Some(&self.lead_notes),
            FieldName::PreferredContact
            | FieldName::PreferredTime
            | FieldName::ServiceRequested => None,
        }
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FullName => Some(&mut self.full_name),
            FieldName::Zip => Some(&mut self.zip),
            FieldName::Email => Some(&mut self.email),
            FieldName::Phone => Some(&mut self.phone),
            FieldName::Address => Some(&mut self.address),
            FieldName::LeadNotes => Some(&mut self.lead_notes),
            FieldName::PreferredContact
            | FieldName::PreferredTime
            | FieldName::ServiceRequested => None,
        }
    }

    /// Current value as shown on screen
    pub fn display_value(&self, field: FieldName) -> String {
        match field {
            FieldName::PreferredContact => self.preferred_contact.label().to_string(),
            FieldName::PreferredTime => self.preferred_time.label().to_string(),
            FieldName::ServiceRequested => self.service_requested.label().to_string(),
            _ => self.text(field).unwrap_or_default().to_string(),
        }
    }

    /// Replace a field's value. Option fields only accept one of their labels.
    pub fn set_field(&mut self, field: FieldName, value: &str) -> Result<(), FieldError> {
        match field {
            FieldName::PreferredContact => {
                self.preferred_contact = PreferredContact::parse_option(value)?
            }
            FieldName::PreferredTime => self.preferred_time = PreferredTime::parse_option(value)?,
            FieldName::ServiceRequested => {
                self.service_requested = ServiceRequested::parse_option(value)?
            }
            _ => {
                if let Some(text) = self.text_mut(field) {
                    *text = value.to_string();
                }
            }
        }
        Ok(())
    }

    /// Append a character to a text field; no-op for option fields
    pub fn push_char(&mut self, field: FieldName, c: char) {
        if let Some(text) = self.text_mut(field) {
            text.push(c);
        }
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self, field: FieldName) {
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    /// Step an option field forward or backward; no-op for text fields
    pub fn cycle_choice(&mut self, field: FieldName, forward: bool) {
        match field {
            FieldName::PreferredContact => {
                self.preferred_contact = step(self.preferred_contact, forward)
            }
            FieldName::PreferredTime => self.preferred_time = step(self.preferred_time, forward),
            FieldName::ServiceRequested => {
                self.service_requested = step(self.service_requested, forward)
            }
            _ => {}
        }
    }

    /// Clear entered text, keeping option selections and focus
    pub fn clear_text_fields(&mut self) {
        self.full_name.clear();
        self.email.clear();
        self.phone.clear();
        self.zip.clear();
        self.address.clear();
        self.lead_notes.clear();
    }

    /// Build the normalized webhook payload
    pub fn to_payload(&self) -> LeadPayload {
        LeadPayload {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: normalize_phone(&self.phone),
            zip: self.zip.trim().to_string(),
            address: self.address.trim().to_string(),
            preferred_contact: self.preferred_contact,
            preferred_time: self.preferred_time,
            service_requested: self.service_requested,
            lead_notes: self.lead_notes.trim().to_string(),
        }
    }
}

fn step<C: Choice>(current: C, forward: bool) -> C {
    if forward {
        current.next()
    } else {
        current.prev()
    }
}

impl Form for LeadForm {
    fn field_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1 // nine fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
}

/// JSON body posted to the webhook
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub zip: String,
    pub address: String,
    pub preferred_contact: PreferredContact,
    pub preferred_time: PreferredTime,
    pub service_requested: ServiceRequested,
    pub lead_notes: String,
}
