//! Chat message types

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageAuthor {
    User,
    Bot,
}

/// Delivery progress for a message.
///
/// Only meaningful for user messages; bot messages are created fully
/// delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryState {
    Sent,
    Delivered,
    Read,
}

/// A single entry in the conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique within the session.
    pub id: Uuid,

    /// UTF-8 content; bot messages may contain markdown.
    pub text: String,

    pub author: MessageAuthor,

    pub created_at: DateTime<Local>,

    pub delivery_state: DeliveryState,
}

impl Message {
    /// Create a user message, initially in the `Sent` state.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            author: MessageAuthor::User,
            created_at: Local::now(),
            delivery_state: DeliveryState::Sent,
        }
    }

    /// Create a bot message, fully delivered on creation.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            author: MessageAuthor::Bot,
            created_at: Local::now(),
            delivery_state: DeliveryState::Read,
        }
    }

    pub fn is_user(&self) -> bool {
        self.author == MessageAuthor::User
    }
}
