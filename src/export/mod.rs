//! Export functionality
//!
//! Writes expense data out as CSV files for spreadsheets.

pub mod csv;

pub use self::csv::{export_expenses_csv, expenses_csv_string, unquoted_writer, EXPENSE_HEADER};
