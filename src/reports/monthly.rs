//! Monthly Report
//!
//! Per-category totals for the calendar month containing "now", with the
//! highest and lowest spending categories called out.

use std::io::Write;

use chrono::{Datelike, NaiveDateTime};

use crate::error::ExpenseResult;
use crate::export::csv::unquoted_writer;
use crate::models::ExpenseRecord;

use super::aggregate::{aggregate, AggregationMode, CategoryAggregate};
use super::amount::format_amount;

/// One category's total for the month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub count: usize,
}

impl From<&CategoryAggregate> for CategoryTotal {
    fn from(bucket: &CategoryAggregate) -> Self {
        Self {
            category: bucket.category.clone(),
            total: bucket.total,
            count: bucket.count,
        }
    }
}

/// Monthly Report
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub year: i32,
    /// Full month name, e.g. "October"
    pub month_name: String,
    /// When the report was generated; also names the CSV download
    pub generated_at: NaiveDateTime,
    /// Totals in first-seen order
    pub categories: Vec<CategoryTotal>,
    pub total_spent: f64,
    highest: Option<CategoryTotal>,
    lowest: Option<CategoryTotal>,
}

impl MonthlyReport {
    /// Build the report from records already filtered to the calendar month
    pub fn from_records(records: &[ExpenseRecord], now: NaiveDateTime) -> Self {
        let aggregation = aggregate(records, AggregationMode::Sum);

        let categories = aggregation
            .categories()
            .iter()
            .map(CategoryTotal::from)
            .collect();

        Self {
            year: now.year(),
            month_name: now.format("%B").to_string(),
            generated_at: now,
            categories,
            total_spent: aggregation.total_spent(),
            highest: aggregation.highest().map(CategoryTotal::from),
            lowest: aggregation.lowest().map(CategoryTotal::from),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category with the largest total
    pub fn highest(&self) -> Option<&CategoryTotal> {
        self.highest.as_ref()
    }

    /// Category with the smallest total
    pub fn lowest(&self) -> Option<&CategoryTotal> {
        self.lowest.as_ref()
    }

    /// Download name for the CSV, e.g. `monthly-report-2026-10-15.csv`
    pub fn file_name(&self) -> String {
        format!("monthly-report-{}.csv", self.generated_at.format("%Y-%m-%d"))
    }

    /// Format the report as plain text
    pub fn format_text(&self, currency_symbol: &str) -> String {
        let mut output = format!("Monthly Report for {} {}:\n\n", self.month_name, self.year);
        output.push_str(&format!(
            "Total Money Spent: {}{}\n\n",
            currency_symbol,
            format_amount(self.total_spent)
        ));

        output.push_str("Category-wise Spending:\n");
        for line in &self.categories {
            output.push_str(&format!(
                "{}: {}{}\n",
                line.category,
                currency_symbol,
                format_amount(line.total)
            ));
        }

        output.push_str("\nData Analysis Points:\n");
        match (self.highest(), self.lowest()) {
            (Some(highest), Some(lowest)) => {
                output.push_str(&format!(
                    "- Highest spending category: {} ({}{})\n",
                    highest.category,
                    currency_symbol,
                    format_amount(highest.total)
                ));
                output.push_str(&format!(
                    "- Lowest spending category: {} ({}{})\n",
                    lowest.category,
                    currency_symbol,
                    format_amount(lowest.total)
                ));
            }
            _ => output.push_str("- No expenses recorded this month.\n"),
        }

        output
    }

    /// Export the category totals to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> ExpenseResult<()> {
        let mut wtr = unquoted_writer(writer);

        wtr.write_record(["Category", "Amount"])?;
        for line in &self.categories {
            wtr.write_record([line.category.as_str(), format_amount(line.total).as_str()])?;
        }
        wtr.write_record(["Total", format_amount(self.total_spent).as_str()])?;

        wtr.flush()?;
        Ok(())
    }

    /// The CSV export as a string
    pub fn csv_string(&self) -> ExpenseResult<String> {
        let mut buf = Vec::new();
        self.export_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
