//! # Session Manager
//!
//! Owns the live conversation session and drives the state machine:
//! user input comes in, webhook requests go out, and results or
//! failures are applied back into session state. The presentation
//! layer renders what this crate exposes and never mutates it.

pub mod error;
pub mod manager;
pub mod session;
pub mod speech;
pub mod storage;

// Re-exports
pub use error::{Result, SessionError};
pub use manager::{ChatController, ResetEvent, SendOutcome};
pub use session::{ChatSession, ViewMode};
pub use speech::{SpeechError, SpeechRecognizer, TranscriptEvent};
pub use storage::{FileLanguageStore, LanguageStore};
