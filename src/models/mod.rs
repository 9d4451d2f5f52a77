//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: stored
//! records, their ids, report periods, and user accounts.

pub mod expense;
pub mod ids;
pub mod period;
pub mod user;

pub use expense::{parse_expense_date, ExpenseRecord, NewExpense};
pub use ids::ExpenseId;
pub use period::{ExportPeriod, Period, PeriodParseError};
pub use user::{Session, UserAccount};
