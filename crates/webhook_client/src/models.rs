//! Wire shapes for the webhook endpoint
//!
//! Requests are one of three JSON bodies keyed by `action`; responses
//! are best-effort with every field optional.

use chat_core::Language;
use serde::{Deserialize, Serialize};

/// The fixed set of actions the webhook understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WebhookAction {
    FirstVisit,
    SendMessage,
    Reset,
}

/// Outbound request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub action: WebhookAction,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl WebhookRequest {
    pub fn first_visit(session_id: impl Into<String>) -> Self {
        Self {
            action: WebhookAction::FirstVisit,
            session_id: session_id.into(),
            chat_input: None,
            language: None,
        }
    }

    pub fn send_message(
        session_id: impl Into<String>,
        chat_input: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            action: WebhookAction::SendMessage,
            session_id: session_id.into(),
            chat_input: Some(chat_input.into()),
            language: Some(language),
        }
    }

    pub fn reset(session_id: impl Into<String>) -> Self {
        Self {
            action: WebhookAction::Reset,
            session_id: session_id.into(),
            chat_input: None,
            language: None,
        }
    }
}

const PUSH_GREETING: &str = "pushGreeting";

/// Inbound response body. All fields are optional; unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    /// The bot reply text for `sendMessage`, or the greeting text for
    /// `firstVisit`. Absence on `sendMessage` means "no content"; the
    /// caller maps it to a localized fallback.
    #[serde(default)]
    pub output: Option<String>,

    #[serde(default, rename = "type")]
    pub response_type: Option<String>,

    #[serde(default)]
    pub push_message: Option<String>,
}

impl WebhookResponse {
    pub fn is_push_greeting(&self) -> bool {
        self.response_type.as_deref() == Some(PUSH_GREETING)
    }

    /// Banner text attached to a `firstVisit` response. Carried in
    /// `output`, unlike reply greetings.
    pub fn first_visit_greeting(&self) -> Option<&str> {
        if self.is_push_greeting() {
            self.output.as_deref()
        } else {
            None
        }
    }

    /// Banner text attached to a `sendMessage` response. Carried in
    /// `pushMessage`.
    pub fn reply_greeting(&self) -> Option<&str> {
        if self.is_push_greeting() {
            self.push_message.as_deref()
        } else {
            None
        }
    }
}
