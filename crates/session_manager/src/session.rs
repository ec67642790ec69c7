//! Live session data

use chat_core::{DeliveryState, Language, Message};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which panel the widget is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Chat,
    Settings,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Chat
    }
}

/// All view state for one conversation session.
///
/// The message log is append-only; only a reset or an explicit clear
/// wipes it, and then atomically together with the banner and view
/// mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    /// Opaque identifier, regenerated on reset.
    pub session_id: String,

    pub language: Language,

    pub messages: Vec<Message>,

    pub view_mode: ViewMode,

    /// Out-of-band server-pushed notice, independent of the log.
    pub banner_text: Option<String>,

    /// Current composer input.
    pub composer: String,

    /// Whether the typing indicator is active.
    pub typing: bool,

    /// Whether the welcome sequence is shown (empty log only).
    pub show_welcome: bool,
}

impl ChatSession {
    pub fn new(language: Language) -> Self {
        Self {
            session_id: new_session_id(),
            language,
            messages: Vec::new(),
            view_mode: ViewMode::Chat,
            banner_text: None,
            composer: String::new(),
            typing: false,
            show_welcome: true,
        }
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Promote the most recent user message after the webhook answered.
    pub fn mark_last_user_read(&mut self) {
        if let Some(msg) = self.messages.iter_mut().rev().find(|m| m.is_user()) {
            msg.delivery_state = DeliveryState::Read;
        }
    }

    /// Wipe the conversation: messages, banner, typing indicator and
    /// view mode together. The composer and language survive.
    pub fn clear_conversation(&mut self) {
        self.messages.clear();
        self.banner_text = None;
        self.typing = false;
        self.show_welcome = true;
        self.view_mode = ViewMode::Chat;
    }

    pub fn rotate_session_id(&mut self) {
        self.session_id = new_session_id();
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}
