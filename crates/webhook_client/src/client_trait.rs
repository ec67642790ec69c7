//! Webhook client trait
//!
//! The session controller depends on this seam so tests can script
//! responses without a network.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{WebhookRequest, WebhookResponse};

#[async_trait]
pub trait WebhookClientTrait: Send + Sync {
    /// Post a request to the webhook and parse the JSON response.
    async fn post(&self, request: &WebhookRequest) -> Result<WebhookResponse>;
}
