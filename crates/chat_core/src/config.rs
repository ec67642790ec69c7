//! Widget configuration

use serde::{Deserialize, Serialize};

const DEFAULT_WEBHOOK_URL: &str =
    "https://skyon.app.n8n.cloud/webhook/bf169e1d-8a6e-4ad6-9521-d89e7e60b4a4/chat";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// The single webhook endpoint performing message processing.
    pub webhook_url: String,

    /// Maximum composer input length, in characters.
    #[serde(default = "default_max_composer_len")]
    pub max_composer_len: usize,

    /// Request timeout for webhook calls, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Whether changing language also rotates the session identifier.
    ///
    /// The reference behavior clears the conversation on language change
    /// but keeps the backend session; set this to get full reset
    /// semantics instead.
    #[serde(default)]
    pub language_change_rotates_session: bool,
}

fn default_max_composer_len() -> usize {
    300
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn parse_bool_env(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetConfig {
    /// Build the configuration, applying environment overrides.
    pub fn new() -> Self {
        let mut config = WidgetConfig {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            max_composer_len: default_max_composer_len(),
            request_timeout_secs: default_request_timeout_secs(),
            language_change_rotates_session: false,
        };

        if let Ok(url) = std::env::var("CHAT_WEBHOOK_URL") {
            config.webhook_url = url;
        }
        if let Ok(rotate) = std::env::var("CHAT_LANGUAGE_CHANGE_ROTATES_SESSION") {
            config.language_change_rotates_session = parse_bool_env(&rotate);
        }
        config
    }

    /// Configuration pointing at a specific webhook URL.
    pub fn with_webhook_url(url: impl Into<String>) -> Self {
        Self {
            webhook_url: url.into(),
            ..Self::new()
        }
    }
}
