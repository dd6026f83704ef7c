//! Actions - User intents that drive conversation transitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three user intents the conversation reducer understands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Replace the draft text verbatim. No validation, no trimming.
    SetDraft { text: String },

    /// Append the current draft as a self-authored message and clear it.
    ///
    /// The caller is expected to gate this on a non-empty draft; the
    /// reducer itself does not check.
    Send,

    /// Remove the message with this id, provided it is self-authored.
    Delete { message_id: Uuid },
}

impl Action {
    /// Short name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetDraft { .. } => "set_draft",
            Self::Send => "send",
            Self::Delete { .. } => "delete",
        }
    }
}
