//! Webhook client error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webhook returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed webhook response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WebhookError>;
