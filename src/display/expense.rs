//! Expense display formatting
//!
//! Formats expense records for the `view` table.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{ExpenseRecord, Period};
use crate::reports::format_amount;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Payment Method")]
    payment_method: String,
    #[tabled(rename = "Category")]
    category: String,
}

impl From<&ExpenseRecord> for ExpenseRow {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            date: record.date.clone(),
            amount: record.amount.to_string(),
            payment_method: record.payment_method.clone(),
            category: record.category.clone(),
        }
    }
}

/// Format expense records as a table
pub fn format_expense_table(records: &[ExpenseRecord]) -> String {
    if records.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut table = Table::new(records.iter().map(ExpenseRow::from));
    table.with(Style::psql());
    table.to_string()
}

/// Table with a heading naming the period
pub fn format_expense_view(period: Period, records: &[ExpenseRecord]) -> String {
    let total: f64 = records.iter().map(|r| r.amount).sum();

    let mut output = format!("Expenses ({})\n\n", period);
    output.push_str(&format_expense_table(records));
    output.push('\n');
    if !records.is_empty() {
        output.push_str(&format!(
            "\n{} expense(s), total {}\n",
            records.len(),
            format_amount(total)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::Utc;

    fn record(id: u64, category: &str, amount: f64) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(id),
            user: "alice".into(),
            amount,
            payment_method: "Card".into(),
            category: category.into(),
            date: "2026-10-15".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[]), "No expenses found.");
    }

    #[test]
    fn test_table_columns() {
        let records = vec![record(1, "Food", 12.5), record(2, "Transport", 3.0)];
        let table = format_expense_table(&records);

        for header in ["Date", "Amount", "Payment Method", "Category"] {
            assert!(table.contains(header));
        }
        assert!(table.contains("12.5"));
        assert!(table.contains("Transport"));
        assert!(!table.contains("alice"));
    }

    #[test]
    fn test_view_footer() {
        let records = vec![record(1, "Food", 12.5), record(2, "Transport", 3.0)];
        let view = format_expense_view(Period::Weekly, &records);
        assert!(view.starts_with("Expenses (weekly)"));
        assert!(view.contains("2 expense(s), total 15.50"));

        let empty = format_expense_view(Period::Daily, &[]);
        assert!(empty.contains("No expenses found."));
        assert!(!empty.contains("total"));
    }
}
