//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit log every write goes through.

pub mod expenses;
pub mod file_io;
pub mod traits;
pub mod users;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use traits::{CredentialStore, ExpenseCursor, ExpenseStore};
pub use users::UserRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    pub users: UserRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            users: UserRepository::new(paths.users_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()?;
        self.users.load()?;
        Ok(())
    }

    /// Record a newly stored entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        user: Option<String>,
        entity: &T,
    ) -> Result<(), ExpenseError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, user, entity))
    }

    /// Record an exported file in the audit log
    pub fn log_export<T: Serialize>(
        &self,
        file_name: impl Into<String>,
        user: Option<String>,
        details: &T,
    ) -> Result<(), ExpenseError> {
        self.audit.log(&AuditEntry::export(file_name, user, details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("exports").exists());
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_audit_helpers() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .log_create(EntityType::Expense, "exp-1", Some("alice".into()), &json!({}))
            .unwrap();
        storage
            .log_export("week-expenses.csv", Some("alice".into()), &json!({"rows": 0}))
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Export);
    }
}
