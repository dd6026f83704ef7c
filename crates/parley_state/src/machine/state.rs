//! Conversation state - The draft plus the ordered transcript

use parley_core::{Message, UserDirectory};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stamp::Stamper;

/// Text of the message every conversation starts with.
const SEED_TEXT: &str = "Hello, how are you?";

/// The whole of the conversation's mutable state.
///
/// Messages are kept strictly in append order; insertion order, display
/// order, and chronological order coincide because timestamps are assigned
/// at append time and entries are never reordered.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationState {
    /// Current unsent input text.
    pub draft: String,
    /// Ordered transcript, oldest first.
    pub messages: Vec<Message>,
}

impl ConversationState {
    /// Seeded initial state: one system-authored greeting, empty draft.
    pub fn initial(directory: &UserDirectory, stamper: &mut impl Stamper) -> Self {
        let seed = Message::new(
            stamper.next_id(),
            directory.system_id().clone(),
            SEED_TEXT,
            stamper.now(),
        );
        Self {
            draft: String::new(),
            messages: vec![seed],
        }
    }

    /// Look up a message by id (first match).
    pub fn message(&self, id: &Uuid) -> Option<&Message> {
        self.messages.iter().find(|message| message.id == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stamp::SequenceStamper;

    #[test]
    fn test_initial_state_is_seeded() {
        let directory = UserDirectory::default();
        let mut stamper = SequenceStamper::new();
        let state = ConversationState::initial(&directory, &mut stamper);

        assert_eq!(state.draft, "");
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].text, "Hello, how are you?");
        assert_eq!(state.messages[0].author, *directory.system_id());
    }

    #[test]
    fn test_message_lookup() {
        let directory = UserDirectory::default();
        let mut stamper = SequenceStamper::new();
        let state = ConversationState::initial(&directory, &mut stamper);

        let seeded = state.messages[0].id;
        assert!(state.message(&seeded).is_some());
        assert!(state.message(&Uuid::nil()).is_none());
    }

    #[test]
    fn test_default_is_empty() {
        let state = ConversationState::default();
        assert_eq!(state.draft, "");
        assert!(state.messages.is_empty());
    }
}
