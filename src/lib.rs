//! Expense Tracker - offline personal expense tracking
//!
//! This library provides the core functionality for the `expense` command:
//! recording daily expenses per user and turning them into weekly and
//! monthly reports, CSV exports, and period tables.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expense records, periods, users)
//! - `storage`: JSON file storage behind the `ExpenseStore` and
//!   `CredentialStore` traits
//! - `reports`: Time windows, category aggregation, report formatting
//! - `export`: CSV writers
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal tables
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::models::Session;
//! use expense_tracker::reports::ExpenseReports;
//! use expense_tracker::storage::Storage;
//!
//! let mut storage = Storage::new(ExpensePaths::new()?)?;
//! storage.load_all()?;
//!
//! let now = chrono::Local::now().naive_local();
//! let text = ExpenseReports::new(&storage.expenses).weekly_report(&Session::new("alice"), now)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
