//! Submission lifecycle: status, failure taxonomy and response decoding

use serde_json::{json, Value};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Submitted ✅ Lead sent to automation.";
pub const LOADING_MESSAGE: &str = "Submitting lead...";

/// Why a submission did not succeed.
///
/// `Display` is the message shown in the status banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Form failed local validation; carries the first failing rule's message
    #[error("{0}")]
    Validation(String),
    /// Endpoint answered with a non-2xx status
    #[error("Request failed ({status}). Check webhook URL / n8n execution.")]
    Http { status: u16 },
    /// No response was obtained; carries the transport error text
    #[error("Network error. Check webhook URL, CORS, or internet.")]
    Network(String),
}

/// Current state of the submit flow
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Banner heading
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Loading => "Working",
            Self::Success(_) => "Success",
            Self::Error(_) => "Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Loading => LOADING_MESSAGE,
            Self::Success(msg) | Self::Error(msg) => msg,
        }
    }
}

impl From<SubmitError> for SubmissionStatus {
    fn from(err: SubmitError) -> Self {
        Self::Error(err.to_string())
    }
}

/// Decode a response body: JSON when it parses, `{"raw": ..}` otherwise,
/// `None` when empty or a JSON `null`.
pub fn parse_response_body(body: &str) -> Option<Value> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str(body) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(_) => Some(json!({ "raw": body })),
    }
}

/// Last-response record for a request that never got an answer
pub fn network_error_body(detail: &str) -> Value {
    json!({ "error": detail })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_idle() {
        let status = SubmissionStatus::default();
        assert!(status.is_idle());
        assert_eq!(status.label(), "");
        assert_eq!(status.message(), "");
    }

    #[test]
    fn test_labels_and_messages() {
        assert_eq!(SubmissionStatus::Loading.label(), "Working");
        assert_eq!(SubmissionStatus::Loading.message(), "Submitting lead...");
        let success = SubmissionStatus::Success(SUCCESS_MESSAGE.to_string());
        assert_eq!(success.label(), "Success");
        assert_eq!(success.message(), SUCCESS_MESSAGE);
        let error = SubmissionStatus::Error("boom".to_string());
        assert_eq!(error.label(), "Error");
        assert_eq!(error.message(), "boom");
    }

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(
            SubmitError::Validation("Full Name is required.".to_string()).to_string(),
            "Full Name is required."
        );
        assert_eq!(
            SubmitError::Http { status: 500 }.to_string(),
            "Request failed (500). Check webhook URL / n8n execution."
        );
        assert_eq!(
            SubmitError::Network("dns error".to_string()).to_string(),
            "Network error. Check webhook URL, CORS, or internet."
        );
    }

    #[test]
    fn test_status_from_error() {
        let status: SubmissionStatus = SubmitError::Http { status: 404 }.into();
        assert_eq!(
            status,
            SubmissionStatus::Error(
                "Request failed (404). Check webhook URL / n8n execution.".to_string()
            )
        );
    }

    #[test]
    fn test_parse_json_body() {
        assert_eq!(parse_response_body(r#"{"ok":true}"#), Some(json!({"ok": true})));
        assert_eq!(parse_response_body("[1,2]"), Some(json!([1, 2])));
        assert_eq!(parse_response_body("\"quoted\""), Some(json!("quoted")));
    }

    #[test]
    fn test_parse_text_body() {
        assert_eq!(
            parse_response_body("server error"),
            Some(json!({"raw": "server error"}))
        );
        assert_eq!(
            parse_response_body("Workflow was started"),
            Some(json!({"raw": "Workflow was started"}))
        );
    }

    #[test]
    fn test_parse_empty_body() {
        assert_eq!(parse_response_body(""), None);
    }

    #[test]
    fn test_null_body_is_no_response() {
        assert_eq!(parse_response_body("null"), None);
        assert_eq!(parse_response_body(" null\n"), None);
    }

    #[test]
    fn test_whitespace_body_is_raw() {
        assert_eq!(parse_response_body("  "), Some(json!({"raw": "  "})));
    }

    #[test]
    fn test_network_error_body() {
        assert_eq!(
            network_error_body("connection refused"),
            json!({"error": "connection refused"})
        );
    }
}
