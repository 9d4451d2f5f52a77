//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and the audit trail.

pub mod account;
pub mod expense;

pub use account::AccountService;
pub use expense::{ExpenseInput, ExpenseService};
