//! User accounts and sessions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user as persisted by the credential store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique username
    pub username: String,

    /// Argon2 PHC string
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// The logged-in user, threaded explicitly into every report and entry call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    /// Create a session for a username
    ///
    /// Normally obtained from `CredentialStore::verify_login`.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// The session's username
    pub fn username(&self) -> &str {
        &self.username
    }
}
