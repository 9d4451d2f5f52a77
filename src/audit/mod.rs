//! Audit logging
//!
//! Records every stored expense, every new account and every exported file in
//! an append-only JSONL log next to the settings file.
//!
//! - `AuditEntry`: one log line with timestamp, operation, entity and user.
//! - `AuditLogger`: appends entries and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
