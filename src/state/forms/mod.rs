//! Form domain layer
//!
//! Lead form state, its option sets, and the validation rules that gate
//! submission.

mod field;
mod form_state;
mod validation;

pub use field::{
    Choice, FieldError, FieldName, PreferredContact, PreferredTime, ServiceRequested,
};
pub use form_state::{Form, LeadForm, LeadPayload, SUBMIT_BUTTON_INDEX};
pub use validation::{
    validate, ValidationResult, CONTACT_REQUIRED, FULL_NAME_REQUIRED, ZIP_INVALID,
};
