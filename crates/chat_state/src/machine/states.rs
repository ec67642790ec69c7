//! Session states - Defines the states of a conversation session
//!
//! The observable UI mode is a product of view mode, pending flag and
//! message-log emptiness; the formal machine only tracks the pending
//! request lifecycle.

use serde::{Deserialize, Serialize};

/// Defines the possible states of a conversation session.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No request in flight, awaiting user input.
    Idle,

    /// A send has been dispatched, response not yet received.
    AwaitingResponse,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

impl SessionState {
    /// Check whether a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::AwaitingResponse)
    }

    /// Check whether a new send may be dispatched from this state.
    pub fn accepts_send(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &str {
        match self {
            Self::Idle => "Ready for input",
            Self::AwaitingResponse => "Waiting for reply",
        }
    }
}
