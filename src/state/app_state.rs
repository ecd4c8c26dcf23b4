//! Application state definitions
//!
//! `AppState` is the submission controller: it owns the lead form, keeps the
//! validation result in step with every edit, and records the outcome of the
//! last submission attempt.

use super::forms::{validate, FieldError, FieldName, Form, LeadForm, LeadPayload, ValidationResult};
use super::submission::{
    network_error_body, parse_response_body, SubmissionStatus, SubmitError, SUCCESS_MESSAGE,
};
use crate::webhook::{WebhookError, WebhookResponse};
use serde_json::Value;

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    form: LeadForm,
    validation: ValidationResult,
    status: SubmissionStatus,
    last_response: Option<Value>,
    /// Endpoint shown in the debug panel
    pub webhook_url: String,
}

impl AppState {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        let form = LeadForm::new();
        Self {
            validation: validate(&form),
            form,
            status: SubmissionStatus::Idle,
            last_response: None,
            webhook_url: webhook_url.into(),
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn last_response(&self) -> Option<&Value> {
        self.last_response.as_ref()
    }

    /// Submitting is blocked while a request is in flight
    pub fn can_submit(&self) -> bool {
        !self.status.is_loading()
    }

    fn revalidate(&mut self) {
        self.validation = validate(&self.form);
    }

    /// Apply a (field, value) update from the presentation layer
    pub fn set_field(&mut self, field: FieldName, value: &str) -> Result<(), FieldError> {
        self.form.set_field(field, value)?;
        self.revalidate();
        Ok(())
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    /// Type a character into the focused text field
    pub fn form_input_char(&mut self, c: char) {
        if let Some(field) = self.form.active_field_name() {
            self.form.push_char(field, c);
            self.revalidate();
        }
    }

    /// Delete the last character of the focused text field
    pub fn form_backspace(&mut self) {
        if let Some(field) = self.form.active_field_name() {
            self.form.pop_char(field);
            self.revalidate();
        }
    }

    /// Insert a line break when the focused field is multiline.
    /// Returns false when the field does not take newlines.
    pub fn form_newline(&mut self) -> bool {
        match self.form.active_field_name() {
            Some(field) if field.is_multiline() => {
                self.form.push_char(field, '\n');
                self.revalidate();
                true
            }
            _ => false,
        }
    }

    /// Step the focused option field forward or backward
    pub fn cycle_active_choice(&mut self, forward: bool) {
        if let Some(field) = self.form.active_field_name() {
            self.form.cycle_choice(field, forward);
            self.revalidate();
        }
    }

    /// First half of a submission.
    ///
    /// Clears the last response and checks validation. Returns the payload to
    /// send when the form is valid (status becomes Loading), otherwise sets
    /// the first validation error and returns `None`. Ignored entirely while
    /// a request is already in flight.
    pub fn begin_submission(&mut self) -> Option<LeadPayload> {
        if !self.can_submit() {
            tracing::debug!("Submit ignored, request already in flight");
            return None;
        }

        self.last_response = None;
        self.revalidate();

        if let Some(message) = self.validation.first_error() {
            tracing::debug!("Lead rejected by validation: {message}");
            self.status = SubmitError::Validation(message.to_string()).into();
            return None;
        }

        self.status = SubmissionStatus::Loading;
        Some(self.form.to_payload())
    }

    /// Second half of a submission: record the transport outcome
    pub fn finish_submission(&mut self, result: Result<WebhookResponse, WebhookError>) {
        match result {
            Ok(response) => {
                self.last_response = parse_response_body(&response.body);

                if !response.is_success() {
                    tracing::warn!("Webhook returned HTTP {}", response.status);
                    self.status = SubmitError::Http {
                        status: response.status,
                    }
                    .into();
                    return;
                }

                tracing::info!("Lead delivered (HTTP {})", response.status);
                self.status = SubmissionStatus::Success(SUCCESS_MESSAGE.to_string());
                self.form.clear_text_fields();
                self.revalidate();
            }
            Err(WebhookError(detail)) => {
                tracing::warn!("Webhook request failed: {detail}");
                self.last_response = Some(network_error_body(&detail));
                self.status = SubmitError::Network(detail).into();
            }
        }
    }
}
