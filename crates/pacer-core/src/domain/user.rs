//! User record.
//!
//! Deliberately thin: the user row carries identity only. Credentials and
//! session handling belong to the authentication layer, and the user's tasks
//! are a store query keyed by owner id, not a list held here.

use serde::{Deserialize, Serialize};

use super::ids::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,

    /// Unique login name; the credential lookup key for the directory.
    pub username: String,
}

impl UserRecord {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}
