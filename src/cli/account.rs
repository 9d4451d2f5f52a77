//! Account CLI commands
//!
//! Implements registration and login, plus resolving the session for
//! commands that act on a user's expenses.

use clap::Subcommand;
use zeroize::Zeroizing;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Session;
use crate::services::AccountService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Register a new user
    Create {
        /// Username
        username: String,
    },
    /// Check a username and password
    Login {
        /// Username
        username: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    cmd: AccountCommands,
    password: Option<String>,
) -> ExpenseResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::Create { username } => {
            let password = match password {
                Some(p) => Zeroizing::new(p),
                None => {
                    let first = prompt("Password: ")?;
                    let confirm = prompt("Confirm password: ")?;
                    if *first != *confirm {
                        return Err(ExpenseError::Validation("Passwords do not match".into()));
                    }
                    first
                }
            };

            service.create(&username, &password)?;
            println!("Account created: {}", username.trim());
        }
        AccountCommands::Login { username } => {
            let password = read_password(password)?;
            let session = service.login(&username, &password)?;
            println!("Login successful: {}", session.username());
        }
    }

    Ok(())
}

/// Log in with `--user` and a password, prompting for the password if needed
pub fn resolve_session(
    storage: &Storage,
    user: Option<&str>,
    password: Option<String>,
) -> ExpenseResult<Session> {
    let username = user.ok_or_else(|| {
        ExpenseError::Validation("No user given. Pass --user or set EXPENSE_USER".into())
    })?;

    let password = read_password(password)?;
    AccountService::new(storage).login(username, &password)
}

fn read_password(provided: Option<String>) -> ExpenseResult<Zeroizing<String>> {
    match provided {
        Some(p) => Ok(Zeroizing::new(p)),
        None => prompt("Password: "),
    }
}

fn prompt(label: &str) -> ExpenseResult<Zeroizing<String>> {
    let password = rpassword::prompt_password(label)
        .map_err(|e| ExpenseError::Io(format!("Failed to read password: {}", e)))?;
    Ok(Zeroizing::new(password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_then_resolve_session() {
        let (_temp_dir, storage) = create_test_storage();
        handle_account_command(
            &storage,
            AccountCommands::Create {
                username: "alice".into(),
            },
            Some("hunter2".into()),
        )
        .unwrap();

        let session = resolve_session(&storage, Some("alice"), Some("hunter2".into())).unwrap();
        assert_eq!(session.username(), "alice");
    }

    #[test]
    fn test_resolve_session_needs_user() {
        let (_temp_dir, storage) = create_test_storage();
        let err = resolve_session(&storage, None, Some("pw".into())).unwrap_err();
        assert!(err.is_validation());
    }
}
