//! Expense service
//!
//! Validates new expenses, stores them, and writes the audit trail.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_expense_date, ExpenseRecord, NewExpense, Session};
use crate::storage::{ExpenseStore, Storage};

/// Raw expense entry as typed by the user
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub amount: f64,
    pub category: String,
    pub payment_method: String,
    /// Leave empty to use today's date
    pub date: Option<String>,
}

/// Service for expense entry
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense for the session's user
    pub fn record(
        &self,
        session: &Session,
        input: ExpenseInput,
        today: NaiveDate,
    ) -> ExpenseResult<ExpenseRecord> {
        if !input.amount.is_finite() {
            return Err(ExpenseError::Validation(format!(
                "Amount must be a number, got {}",
                input.amount
            )));
        }

        let category = input.category.trim();
        if category.is_empty() {
            return Err(ExpenseError::Validation("Category cannot be empty".into()));
        }

        let payment_method = input.payment_method.trim();
        if payment_method.is_empty() {
            return Err(ExpenseError::Validation(
                "Payment method cannot be empty".into(),
            ));
        }

        let date = match input.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => {
                if parse_expense_date(date).is_none() {
                    return Err(ExpenseError::Validation(format!(
                        "Unrecognized date: {} (use YYYY-MM-DD)",
                        date
                    )));
                }
                date.to_string()
            }
            _ => today.format("%Y-%m-%d").to_string(),
        };

        let id = self.storage.expenses.insert(NewExpense {
            user: session.username().to_string(),
            amount: input.amount,
            payment_method: payment_method.to_string(),
            category: category.to_string(),
            date,
        })?;

        let record = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        // The record is already persisted; a failed audit append only warns
        if let Err(e) = self.storage.log_create(
            EntityType::Expense,
            id.to_string(),
            Some(session.username().to_string()),
            &record,
        ) {
            tracing::warn!(id = %id, error = %e, "expense stored but not audited");
        }

        Ok(record)
    }
}
