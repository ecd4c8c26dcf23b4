//! Trait abstraction for the webhook transport to enable mocking in tests

use crate::state::LeadPayload;
use async_trait::async_trait;
use thiserror::Error;

/// Raw HTTP answer from the webhook endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body read as text (may be empty)
    pub body: String,
}

impl WebhookResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (DNS, connection, TLS, bad URL)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct WebhookError(pub String);

/// Trait for webhook delivery, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// POST the payload as JSON and read the whole response body
    async fn post_lead(&self, payload: &LeadPayload) -> Result<WebhookResponse, WebhookError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let ok = |status| WebhookResponse {
            status,
            body: String::new(),
        };
        assert!(ok(200).is_success());
        assert!(ok(204).is_success());
        assert!(ok(299).is_success());
        assert!(!ok(199).is_success());
        assert!(!ok(301).is_success());
        assert!(!ok(404).is_success());
        assert!(!ok(500).is_success());
    }

    #[test]
    fn test_error_display_is_detail() {
        let err = WebhookError("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
