//! Expense CLI commands
//!
//! Adding expenses and viewing them as a table.

use chrono::NaiveDateTime;
use clap::Args;

use crate::config::Settings;
use crate::display::format_expense_view;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Period, Session};
use crate::reports::ExpenseReports;
use crate::services::{ExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Category (e.g. Food, Transport)
    #[arg(short, long)]
    pub category: String,

    /// Payment method (e.g. Card, Cash)
    #[arg(short, long)]
    pub payment_method: String,

    /// Expense date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Handle `add`
pub fn handle_add_command(
    storage: &Storage,
    session: &Session,
    args: AddArgs,
    now: NaiveDateTime,
) -> ExpenseResult<()> {
    let record = ExpenseService::new(storage).record(
        session,
        ExpenseInput {
            amount: args.amount,
            category: args.category,
            payment_method: args.payment_method,
            date: args.date,
        },
        now.date(),
    )?;

    println!(
        "Expense added: {} {} ({}, {}) [{}]",
        record.date, record.amount, record.category, record.payment_method, record.id
    );
    Ok(())
}

/// Handle `view`
pub fn handle_view_command(
    storage: &Storage,
    settings: &Settings,
    session: &Session,
    period: Option<String>,
    now: NaiveDateTime,
) -> ExpenseResult<()> {
    let period = match period {
        Some(p) => Period::parse(&p).map_err(|e| ExpenseError::Validation(e.to_string()))?,
        None => settings.default_view_period,
    };

    let records = ExpenseReports::new(&storage.expenses).view_table(session, now, period)?;
    println!("{}", format_expense_view(period, &records));
    Ok(())
}
