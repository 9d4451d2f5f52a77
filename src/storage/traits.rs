//! Storage abstraction traits
//!
//! The reporting engine and services only see these traits, so any backend
//! that can hand out a full-scan cursor can feed the reports.

use crate::error::ExpenseResult;
use crate::models::{ExpenseId, ExpenseRecord, NewExpense, Session};

/// A read cursor over every stored expense, in ascending id order
///
/// Each call to `open_read_cursor` starts a fresh scan. An `Err` item ends the
/// scan for the caller.
pub type ExpenseCursor<'a> = Box<dyn Iterator<Item = ExpenseResult<ExpenseRecord>> + 'a>;

/// Durable, append-only collection of expense records
pub trait ExpenseStore {
    /// Open a cursor over all records
    fn open_read_cursor(&self) -> ExpenseResult<ExpenseCursor<'_>>;

    /// Store a new record and return its assigned id
    fn insert(&self, expense: NewExpense) -> ExpenseResult<ExpenseId>;
}

/// Account creation and login
pub trait CredentialStore {
    /// Register a new user; fails with `Duplicate` if the username is taken
    fn create_account(&self, username: &str, password: &str) -> ExpenseResult<()>;

    /// Check a username/password pair and open a session for it
    fn verify_login(&self, username: &str, password: &str) -> ExpenseResult<Session>;
}
