//! User repository for JSON storage
//!
//! Persists accounts to users.json with Argon2 password hashes.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Session, UserAccount};

use super::file_io::{read_json, write_json_atomic};
use super::traits::CredentialStore;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<UserAccount>,
}

/// Repository for user accounts, keyed by username
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<String, UserAccount>>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for user in file_data.users {
            data.insert(user.username.clone(), user);
        }

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = UserData {
            users: data.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a user by username
    pub fn get(&self, username: &str) -> Result<Option<UserAccount>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(username).cloned())
    }

    /// Check whether a username is registered
    pub fn exists(&self, username: &str) -> Result<bool, ExpenseError> {
        Ok(self.get(username)?.is_some())
    }

    /// Count registered users
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

impl CredentialStore for UserRepository {
    fn create_account(&self, username: &str, password: &str) -> ExpenseResult<()> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ExpenseError::Validation("Username cannot be empty".into()));
        }
        if password.is_empty() {
            return Err(ExpenseError::Validation("Password cannot be empty".into()));
        }

        {
            let data = self
                .data
                .read()
                .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
            if data.contains_key(username) {
                return Err(ExpenseError::duplicate_user(username));
            }
        }

        let password_hash = hash_password(password)?;

        {
            let mut data = self
                .data
                .write()
                .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
            if data.contains_key(username) {
                return Err(ExpenseError::duplicate_user(username));
            }
            data.insert(
                username.to_string(),
                UserAccount {
                    username: username.to_string(),
                    password_hash,
                    created_at: Utc::now(),
                },
            );
        }

        if let Err(e) = self.save() {
            // Keep memory consistent with disk
            if let Ok(mut data) = self.data.write() {
                data.remove(username);
            }
            return Err(e);
        }

        tracing::info!(user = username, "account created");
        Ok(())
    }

    fn verify_login(&self, username: &str, password: &str) -> ExpenseResult<Session> {
        let username = username.trim();
        let account = self.get(username)?.ok_or_else(|| {
            tracing::debug!(user = username, "login for unknown user");
            ExpenseError::InvalidCredentials
        })?;

        let parsed = PasswordHash::new(&account.password_hash).map_err(|e| {
            ExpenseError::Storage(format!("Corrupt password hash for {}: {}", username, e))
        })?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| {
                tracing::debug!(user = username, "login with wrong password");
                ExpenseError::InvalidCredentials
            })?;

        Ok(Session::new(account.username))
    }
}

fn hash_password(password: &str) -> ExpenseResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ExpenseError::Storage(format!("Failed to hash password: {}", e)))
}
