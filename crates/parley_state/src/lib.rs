//! parley_state - Reducer and conversation state for the parley chat mock-up
//!
//! This crate provides the conversation state machine: a pure transition
//! function mapping (state, action) to the next state, plus a stateful
//! `Conversation` wrapper that applies actions in place and keeps a bounded
//! dispatch history. Id and timestamp generation are isolated behind the
//! `Stamper` trait so the transition function itself is deterministic.

pub mod machine;
pub mod stamp;

// Re-export commonly used types
pub use machine::{apply, Action, Conversation, ConversationState, Dispatch, Transition};
pub use stamp::{SequenceStamper, Stamper, SystemStamper};
