//! chat_state - State machine for the conversation session lifecycle
//!
//! This crate provides the state machine governing the message send
//! lifecycle: at most one request in flight, and every failure returns
//! the session to `Idle` so the user can retry.

pub mod machine;

// Re-export commonly used types
pub use machine::{SessionEvent, SessionState, StateMachine, StateTransition};
