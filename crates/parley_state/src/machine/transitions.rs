//! State transitions - The conversation reducer
//!
//! Implements the pure transition function and the stateful wrapper that
//! applies actions in place.

use parley_core::{Message, UserDirectory};

use super::actions::Action;
use super::state::ConversationState;
use crate::stamp::{Stamper, SystemStamper};

/// Result of applying one action.
#[derive(Debug, Clone)]
pub struct Transition {
    /// The state after the action.
    pub state: ConversationState,
    /// Whether the action had its effect. `false` exactly when a delete
    /// was refused (unknown id or non-self author).
    pub applied: bool,
}

/// Compute the next state for one action.
///
/// Total over all inputs: a request that cannot take effect returns the
/// current state unchanged (as a fresh value) with `applied == false`
/// instead of an error. The stamper is the only source of impurity; under
/// a fixed stamper the function is deterministic.
pub fn apply(
    state: &ConversationState,
    directory: &UserDirectory,
    action: &Action,
    stamper: &mut impl Stamper,
) -> Transition {
    match action {
        Action::SetDraft { text } => Transition {
            state: ConversationState {
                draft: text.clone(),
                messages: state.messages.clone(),
            },
            applied: true,
        },

        Action::Send => {
            // Draft is captured verbatim, empty or not. The send control
            // in the UI is the place that gates on emptiness.
            let message = Message::new(
                stamper.next_id(),
                directory.self_id().clone(),
                state.draft.clone(),
                stamper.now(),
            );
            let mut messages = state.messages.clone();
            messages.push(message);
            Transition {
                state: ConversationState {
                    draft: String::new(),
                    messages,
                },
                applied: true,
            }
        }

        Action::Delete { message_id } => {
            let position = state
                .messages
                .iter()
                .position(|message| message.id == *message_id);
            match position {
                Some(index) if state.messages[index].is_authored_by(directory.self_id()) => {
                    let mut messages = state.messages.clone();
                    messages.remove(index);
                    Transition {
                        state: ConversationState {
                            draft: state.draft.clone(),
                            messages,
                        },
                        applied: true,
                    }
                }
                // Unknown id or foreign author. The refusal is silent.
                _ => Transition {
                    state: state.clone(),
                    applied: false,
                },
            }
        }
    }
}

/// Record of one dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// The action that was dispatched.
    pub action: Action,
    /// Whether it had its effect.
    pub applied: bool,
}

/// Stateful wrapper owning one conversation.
///
/// Applies actions in place through [`apply`] and keeps a bounded history
/// of dispatch records for diagnostics.
#[derive(Debug, Clone)]
pub struct Conversation<S = SystemStamper> {
    /// Current state.
    state: ConversationState,
    /// Participant directory, fixed for the conversation's lifetime.
    directory: UserDirectory,
    /// Id and clock source.
    stamper: S,
    /// Dispatch history (limited).
    history: Vec<Dispatch>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for Conversation<SystemStamper> {
    fn default() -> Self {
        Self::new(UserDirectory::default())
    }
}

impl Conversation<SystemStamper> {
    /// Create a seeded conversation using the system clock and random ids.
    pub fn new(directory: UserDirectory) -> Self {
        Self::with_stamper(directory, SystemStamper)
    }
}

impl<S: Stamper> Conversation<S> {
    /// Create a seeded conversation with an explicit stamper.
    pub fn with_stamper(directory: UserDirectory, mut stamper: S) -> Self {
        let state = ConversationState::initial(&directory, &mut stamper);
        Self {
            state,
            directory,
            stamper,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Get the participant directory.
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Get the dispatch history.
    pub fn history(&self) -> &[Dispatch] {
        &self.history
    }

    /// Apply an action to the conversation.
    pub fn dispatch(&mut self, action: Action) -> Dispatch {
        tracing::debug!(
            action = action.kind(),
            messages = self.state.messages.len(),
            "dispatching action"
        );

        let transition = apply(&self.state, &self.directory, &action, &mut self.stamper);
        let list_changed = transition.state.messages.len() != self.state.messages.len();
        self.state = transition.state;

        if !transition.applied {
            tracing::debug!(action = action.kind(), "request had no effect");
        } else if list_changed {
            tracing::info!(
                action = action.kind(),
                messages = self.state.messages.len(),
                "message list changed"
            );
        }

        let dispatch = Dispatch {
            action,
            applied: transition.applied,
        };

        // Add to history
        self.history.push(dispatch.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        dispatch
    }
}
