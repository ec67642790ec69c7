//! State machine module
//!
//! Contains the FSM implementation for the session send lifecycle.

mod events;
mod states;
mod transitions;

pub use events::SessionEvent;
pub use states::SessionState;
pub use transitions::{StateMachine, StateTransition};
