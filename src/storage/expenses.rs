//! Expense repository for JSON storage
//!
//! Manages loading and saving expense records to expenses.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, ExpenseRecord, NewExpense};

use super::file_io::{read_json, write_json_atomic};
use super::traits::{ExpenseCursor, ExpenseStore};

/// On-disk layout of expenses.json
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    /// Next id to hand out; never reused
    next_id: ExpenseId,
    /// Records in insertion (ascending id) order
    expenses: Vec<ExpenseRecord>,
}

impl Default for ExpenseData {
    fn default() -> Self {
        Self {
            next_id: ExpenseId::FIRST,
            expenses: Vec::new(),
        }
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<ExpenseData>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(ExpenseData::default()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        let mut file_data: ExpenseData = read_json(&self.path)?;

        file_data.expenses.sort_by_key(|e| e.id);

        // A hand-edited file may lag behind its own records
        if let Some(last) = file_data.expenses.last() {
            if file_data.next_id <= last.id {
                tracing::warn!(
                    next_id = %file_data.next_id,
                    last_id = %last.id,
                    "next_id behind stored records, advancing"
                );
                file_data.next_id = last.id.next();
            }
        }

        tracing::debug!(count = file_data.expenses.len(), path = %self.path.display(), "loaded expenses");

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data;

        Ok(())
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> Result<Option<ExpenseRecord>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .expenses
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|idx| data.expenses[idx].clone()))
    }

    /// Count stored expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.expenses.len())
    }
}

impl ExpenseStore for ExpenseRepository {
    fn open_read_cursor(&self) -> ExpenseResult<ExpenseCursor<'_>> {
        let snapshot = {
            let data = self
                .data
                .read()
                .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
            data.expenses.clone()
        };

        tracing::debug!(count = snapshot.len(), "opened expense cursor");
        Ok(Box::new(snapshot.into_iter().map(Ok)))
    }

    /// Persists before the in-memory view changes, so a failed write leaves
    /// both untouched.
    fn insert(&self, expense: NewExpense) -> ExpenseResult<ExpenseId> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = data.next_id;
        let mut updated = data.clone();
        updated.expenses.push(ExpenseRecord::from_new(id, expense));
        updated.next_id = id.next();

        write_json_atomic(&self.path, &updated)?;
        *data = updated;

        tracing::info!(id = %id, "expense stored");
        Ok(id)
    }
}
