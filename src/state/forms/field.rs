//! Form field identifiers and option sets

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when a field update cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("'{value}' is not a valid option for {field}")]
    InvalidOption { field: &'static str, value: String },
}

/// Identifies one of the nine lead form fields, in on-screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FullName,
    Zip,
    Email,
    Phone,
    Address,
    PreferredContact,
    PreferredTime,
    ServiceRequested,
    LeadNotes,
}

impl FieldName {
    /// All fields in focus order
    pub const ALL: [FieldName; 9] = [
        FieldName::FullName,
        FieldName::Zip,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Address,
        FieldName::PreferredContact,
        FieldName::PreferredTime,
        FieldName::ServiceRequested,
        FieldName::LeadNotes,
    ];

    /// JSON key used in the webhook payload
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Zip => "zip",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::PreferredContact => "preferredContact",
            Self::PreferredTime => "preferredTime",
            Self::ServiceRequested => "serviceRequested",
            Self::LeadNotes => "leadNotes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name *",
            Self::Zip => "ZIP *",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::PreferredContact => "Preferred Contact",
            Self::PreferredTime => "Preferred Time",
            Self::ServiceRequested => "Service Requested",
            Self::LeadNotes => "Lead Notes",
        }
    }

    /// Hint text shown while a text field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Sam Demo",
            Self::Zip => "17110",
            Self::Email => "sam@example.com",
            Self::Phone => "(619) 379-7248",
            Self::Address => "123 Market St",
            Self::LeadNotes => {
                "Need bathroom remodel, want quote this month. Ready to schedule consultation."
            }
            Self::PreferredContact | Self::PreferredTime | Self::ServiceRequested => "",
        }
    }

    /// True for the enumerated (dropdown) fields
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            Self::PreferredContact | Self::PreferredTime | Self::ServiceRequested
        )
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::LeadNotes)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// Shared behaviour of the enumerated option sets
pub trait Choice: Copy + PartialEq + Sized + 'static {
    const OPTIONS: &'static [Self];
    const FIELD: &'static str;

    fn label(&self) -> &'static str;

    fn index(&self) -> usize {
        Self::OPTIONS.iter().position(|o| o == self).unwrap_or(0)
    }

    /// Next option, wrapping around
    fn next(&self) -> Self {
        Self::OPTIONS[(self.index() + 1) % Self::OPTIONS.len()]
    }

    /// Previous option, wrapping around
    fn prev(&self) -> Self {
        let len = Self::OPTIONS.len();
        Self::OPTIONS[(self.index() + len - 1) % len]
    }

    fn parse_option(value: &str) -> Result<Self, FieldError> {
        Self::OPTIONS
            .iter()
            .copied()
            .find(|o| o.label() == value)
            .ok_or_else(|| FieldError::InvalidOption {
                field: Self::FIELD,
                value: value.to_string(),
            })
    }
}

/// How the customer wants to be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PreferredContact {
    #[default]
    Email,
    Phone,
}

impl Choice for PreferredContact {
    const OPTIONS: &'static [Self] = &[Self::Email, Self::Phone];
    const FIELD: &'static str = "preferredContact";

    fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }
}

/// Time of day the customer prefers to be contacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PreferredTime {
    Morning,
    #[default]
    Afternoon,
    Evening,
}

impl Choice for PreferredTime {
    const OPTIONS: &'static [Self] = &[Self::Morning, Self::Afternoon, Self::Evening];
    const FIELD: &'static str = "preferredTime";

    fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }
}

/// Service the lead is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ServiceRequested {
    #[default]
    Bathroom,
    Kitchen,
    Windows,
    Doors,
    Other,
}

impl Choice for ServiceRequested {
    const OPTIONS: &'static [Self] = &[
        Self::Bathroom,
        Self::Kitchen,
        Self::Windows,
        Self::Doors,
        Self::Other,
    ];
    const FIELD: &'static str = "serviceRequested";

    fn label(&self) -> &'static str {
        match self {
            Self::Bathroom => "Bathroom",
            Self::Kitchen => "Kitchen",
            Self::Windows => "Windows",
            Self::Doors => "Doors",
            Self::Other => "Other",
        }
    }
}
