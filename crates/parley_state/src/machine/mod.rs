//! State machine module
//!
//! Contains the reducer implementation for the conversation lifecycle.

mod actions;
mod state;
mod transitions;

pub use actions::Action;
pub use state::ConversationState;
pub use transitions::{apply, Conversation, Dispatch, Transition};
