//! Session events - Defines events that trigger state transitions

use serde::{Deserialize, Serialize};

/// Defines the events that can trigger state transitions in the FSM.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    /// A user message passed validation and a request was dispatched.
    SendDispatched,

    /// The webhook answered the in-flight request.
    ResponseReceived,

    /// The in-flight request failed (transport or malformed response).
    RequestFailed { error: String },

    /// The session was reset; any in-flight result is abandoned.
    ResetRequested,
}

impl SessionEvent {
    /// Check if this event is user-initiated.
    pub fn is_user_event(&self) -> bool {
        matches!(self, Self::SendDispatched | Self::ResetRequested)
    }

    /// Check if this is an error event.
    pub fn is_error_event(&self) -> bool {
        matches!(self, Self::RequestFailed { .. })
    }
}
