//! User identities - The static directory used for display labels
//!
//! Two identities exist for the lifetime of the process: the local "self"
//! user, who authors and may delete messages, and the non-interactive
//! "system" user behind seeded messages. The directory is read-only lookup
//! data, never evolving state.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the self identity in the default directory.
pub const SELF_USER_ID: &str = "123";

/// Id of the system identity in the default directory.
pub const SYSTEM_USER_ID: &str = "456";

/// Opaque identifier for a user.
///
/// Ids are arbitrary strings; a message may carry an id the directory does
/// not know, in which case no display label exists for it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A participant known to the conversation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    /// Display name shown above this user's messages.
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Errors that can occur while building a [`UserDirectory`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("duplicate user id: {0}")]
    DuplicateUserId(UserId),

    #[error("self identity {0} is not among the listed users")]
    UnknownSelfId(UserId),

    #[error("system identity {0} is not among the listed users")]
    UnknownSystemId(UserId),
}

/// Immutable lookup table of the conversation's participants.
///
/// Built once at startup and passed by reference wherever display labels or
/// authorship checks are needed. Nothing here changes at runtime.
#[derive(Clone, Debug)]
pub struct UserDirectory {
    users: HashMap<UserId, User>,
    self_id: UserId,
    system_id: UserId,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::with_self_name("Justin")
    }
}

impl UserDirectory {
    /// Build a validated directory from an explicit user set.
    ///
    /// Both designated identities must appear in `users`, and ids must be
    /// unique.
    pub fn new(
        users: Vec<User>,
        self_id: UserId,
        system_id: UserId,
    ) -> Result<Self, DirectoryError> {
        let mut map = HashMap::with_capacity(users.len());
        for user in users {
            if map.contains_key(&user.id) {
                return Err(DirectoryError::DuplicateUserId(user.id));
            }
            map.insert(user.id.clone(), user);
        }
        if !map.contains_key(&self_id) {
            return Err(DirectoryError::UnknownSelfId(self_id));
        }
        if !map.contains_key(&system_id) {
            return Err(DirectoryError::UnknownSystemId(system_id));
        }
        Ok(Self {
            users: map,
            self_id,
            system_id,
        })
    }

    /// The default two-user directory with a custom self display name.
    pub fn with_self_name(name: impl Into<String>) -> Self {
        Self::new(
            vec![
                User::new(SELF_USER_ID, name),
                User::new(SYSTEM_USER_ID, "System"),
            ],
            UserId::new(SELF_USER_ID),
            UserId::new(SYSTEM_USER_ID),
        )
        .expect("seed directory is well formed")
    }

    /// Identity allowed to send and delete messages.
    pub fn self_id(&self) -> &UserId {
        &self.self_id
    }

    /// Identity behind seeded, non-deletable messages.
    pub fn system_id(&self) -> &UserId {
        &self.system_id
    }

    /// Display name for `id`, or `None` when the id is unrecognized.
    pub fn display_name(&self, id: &UserId) -> Option<&str> {
        self.users.get(id).map(|user| user.name.as_str())
    }

    /// Check whether `id` is the self identity.
    pub fn is_self(&self, id: &UserId) -> bool {
        *id == self.self_id
    }
}
