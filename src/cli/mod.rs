//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod expense;
pub mod history;
pub mod report;

pub use account::{handle_account_command, resolve_session, AccountCommands};
pub use expense::{handle_add_command, handle_view_command, AddArgs};
pub use history::handle_history_command;
pub use report::{handle_export_command, handle_report_command, ReportCommands};
