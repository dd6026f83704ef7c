//! Message - One immutable entry in the conversation transcript

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::UserId;

/// A single transcript entry.
///
/// Id, author, and timestamp are fixed at creation; a message is never
/// edited, only appended or removed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub author: UserId,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: Uuid,
        author: UserId,
        text: impl Into<String>,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author,
            text: text.into(),
            sent_at,
        }
    }

    /// Check whether `id` wrote this message.
    pub fn is_authored_by(&self, id: &UserId) -> bool {
        self.author == *id
    }
}
