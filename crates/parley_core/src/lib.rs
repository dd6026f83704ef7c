//! parley_core - Core types for the parley chat mock-up
//!
//! This crate provides the foundational values shared by the state machine
//! and the front-end:
//! - `user` - identities and the immutable display-name directory
//! - `message` - the transcript entry type
//! - `timestamp` - display-time labels for message times

pub mod message;
pub mod timestamp;
pub mod user;

// Re-export commonly used types
pub use message::Message;
pub use timestamp::{timestamp_label, timestamp_label_at};
pub use user::{DirectoryError, User, UserDirectory, UserId, SELF_USER_ID, SYSTEM_USER_ID};
