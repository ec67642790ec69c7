//! reqwest implementation of the webhook client

use std::time::Duration;

use async_trait::async_trait;
use chat_core::WidgetConfig;
use log::{debug, warn};
use reqwest::header::HeaderMap;
use reqwest::Client;

use crate::client_trait::WebhookClientTrait;
use crate::error::{Result, WebhookError};
use crate::models::{WebhookRequest, WebhookResponse};

/// Stateless HTTP client for the single configured webhook URL.
///
/// Performs no retries; a non-success status or transport failure maps
/// uniformly to `WebhookError` and the caller decides what to do.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
    webhook_url: String,
}

impl WebhookClient {
    pub fn new(config: &WidgetConfig) -> Self {
        let http = Client::builder()
            .default_headers(Self::default_headers())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("webhook http client");

        Self {
            http,
            webhook_url: config.webhook_url.clone(),
        }
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("accept", "application/json".parse().unwrap());
        headers.insert("content-type", "application/json".parse().unwrap());
        headers
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }
}

#[async_trait]
impl WebhookClientTrait for WebhookClient {
    async fn post(&self, request: &WebhookRequest) -> Result<WebhookResponse> {
        debug!(
            "posting {:?} for session {}",
            request.action, request.session_id
        );

        let response = self
            .http
            .post(&self.webhook_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("webhook returned {} for {:?}", status, request.action);
            return Err(WebhookError::Status(status));
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<WebhookResponse>(&body)?;
        Ok(parsed)
    }
}
