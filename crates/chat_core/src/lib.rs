//! chat_core - Core types for the chat widget
//!
//! This crate provides the foundational types used across the widget crates:
//! - `message` - chat messages and delivery states
//! - `language` - supported languages
//! - `translations` - per-language static text and quick-reply lists
//! - `preprocess` - rewrite rules applied to outgoing user text
//! - `transcript` - plain-text conversation export
//! - `config` - widget configuration

pub mod config;
pub mod language;
pub mod message;
pub mod preprocess;
pub mod transcript;
pub mod translations;

// Re-export commonly used types
pub use config::WidgetConfig;
pub use language::Language;
pub use message::{DeliveryState, Message, MessageAuthor};
pub use preprocess::{RewriteRule, RewriteRules, RuleMatcher};
pub use transcript::{render_transcript, transcript_filename};
pub use translations::Translations;
