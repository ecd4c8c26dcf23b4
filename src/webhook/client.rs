//! HTTP client for posting leads to the automation webhook
//!
//! One request per submission: no retries, no timeout beyond what the
//! network stack imposes.

use super::traits::{WebhookError, WebhookResponse, WebhookTransport};
use crate::state::LeadPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;

const USER_AGENT: &str = concat!("lead-intake/", env!("CARGO_PKG_VERSION"));

/// Client for delivering leads to a single webhook URL
pub struct WebhookClient {
    /// The HTTP client
    client: reqwest::Client,
    /// The webhook URL (may be empty when unconfigured)
    url: String,
}

impl WebhookClient {
    /// Create a new webhook client for the given URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client, url))
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    #[cfg(test)]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WebhookTransport for WebhookClient {
    async fn post_lead(&self, payload: &LeadPayload) -> Result<WebhookResponse, WebhookError> {
        tracing::debug!("Posting lead to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| WebhookError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| WebhookError(e.to_string()))?;

        tracing::debug!("Webhook answered {status} with {} bytes", body.len());
        Ok(WebhookResponse { status, body })
    }
}
