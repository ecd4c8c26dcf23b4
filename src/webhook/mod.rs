//! Webhook transport module for delivering leads over HTTP

mod client;
mod traits;

pub use client::WebhookClient;
pub use traits::{WebhookError, WebhookResponse, WebhookTransport};

#[cfg(test)]
pub use traits::MockWebhookTransport;
