//! Lead validation and field normalization

use super::form_state::LeadForm;
use once_cell::sync::Lazy;
use regex::Regex;

pub const FULL_NAME_REQUIRED: &str = "Full Name is required.";
pub const ZIP_INVALID: &str = "ZIP must be a valid 5-digit ZIP (or ZIP+4).";
pub const CONTACT_REQUIRED: &str = "Please provide Email or Phone.";

/// Longest phone number forwarded to the webhook
const MAX_PHONE_LEN: usize = 20;

// 12345 or 12345-6789, ASCII digits only
static ZIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("ZIP pattern is valid"));

/// Outcome of validating a lead form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failed rule messages in evaluation order
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

/// Validate the required subset of a lead form.
///
/// Every rule runs regardless of earlier failures so the caller can show
/// all problems at once.
pub fn validate(form: &LeadForm) -> ValidationResult {
    let mut errors = Vec::new();

    if form.full_name.trim().is_empty() {
        errors.push(FULL_NAME_REQUIRED.to_string());
    }
    if !is_valid_zip(&form.zip) {
        errors.push(ZIP_INVALID.to_string());
    }
    let has_email = !form.email.trim().is_empty();
    let has_phone = !form.phone.trim().is_empty();
    if !(has_email || has_phone) {
        errors.push(CONTACT_REQUIRED.to_string());
    }

    ValidationResult { errors }
}

/// Format check only; any five digits pass
pub fn is_valid_zip(zip: &str) -> bool {
    ZIP_PATTERN.is_match(zip.trim())
}

/// Keep digits and `+`, capped at 20 characters
pub fn normalize_phone(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .take(MAX_PHONE_LEN)
        .collect()
}
