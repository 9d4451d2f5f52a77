//! Account service
//!
//! Registration and login on top of the credential store.

use serde_json::json;

use crate::audit::EntityType;
use crate::error::ExpenseResult;
use crate::models::Session;
use crate::storage::{CredentialStore, Storage};

/// Service for user accounts
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user
    pub fn create(&self, username: &str, password: &str) -> ExpenseResult<()> {
        self.storage.users.create_account(username, password)?;

        let username = username.trim();
        if let Err(e) = self.storage.log_create(
            EntityType::User,
            username,
            Some(username.to_string()),
            &json!({ "username": username }),
        ) {
            tracing::warn!(user = username, error = %e, "account created but not audited");
        }

        Ok(())
    }

    /// Check credentials and open a session
    pub fn login(&self, username: &str, password: &str) -> ExpenseResult<Session> {
        let session = self.storage.users.verify_login(username, password)?;
        tracing::debug!(user = session.username(), "logged in");
        Ok(session)
    }
}
