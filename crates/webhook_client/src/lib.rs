//! webhook_client - HTTP client for the chat processing webhook
//!
//! All message intelligence lives behind a single external endpoint.
//! This crate owns the wire shapes, the transport error taxonomy and a
//! reqwest implementation; retry policy, if any, is the caller's
//! responsibility (none is performed here).

pub mod client;
pub mod client_trait;
pub mod error;
pub mod models;

pub use client::WebhookClient;
pub use client_trait::WebhookClientTrait;
pub use error::{Result, WebhookError};
pub use models::{WebhookAction, WebhookRequest, WebhookResponse};
