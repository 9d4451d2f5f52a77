//! Audit history for the logged-in user

use crate::error::ExpenseResult;
use crate::models::Session;
use crate::storage::Storage;

/// Print the user's most recent audit entries, oldest first
pub fn handle_history_command(storage: &Storage, session: &Session, limit: usize) -> ExpenseResult<()> {
    let entries: Vec<_> = storage
        .audit()
        .read_all()?
        .into_iter()
        .filter(|e| e.user.as_deref() == Some(session.username()))
        .collect();

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    let start = entries.len().saturating_sub(limit);
    for entry in &entries[start..] {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
