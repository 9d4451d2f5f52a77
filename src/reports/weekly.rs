//! Weekly Report
//!
//! Largest and smallest single expense per category over the last seven days.

use chrono::NaiveDateTime;

use crate::models::{ExpenseRecord, Period};

use super::aggregate::{aggregate, AggregationMode};
use super::window::TimeWindow;

/// Max/min line for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryExtremes {
    pub category: String,
    pub max: f64,
    pub min: f64,
    pub count: usize,
}

/// Weekly Report
#[derive(Debug, Clone)]
pub struct WeeklyReport {
    /// Start of the rolling window
    pub window_start: NaiveDateTime,
    /// When the report was generated
    pub generated_at: NaiveDateTime,
    /// One entry per category, in first-seen order
    pub categories: Vec<CategoryExtremes>,
}

impl WeeklyReport {
    /// Build the report from records already filtered to the weekly window
    pub fn from_records(records: &[ExpenseRecord], now: NaiveDateTime) -> Self {
        let aggregation = aggregate(records, AggregationMode::Extremes);

        let categories = aggregation
            .categories()
            .iter()
            .filter_map(|bucket| {
                Some(CategoryExtremes {
                    category: bucket.category.clone(),
                    max: bucket.max()?,
                    min: bucket.min()?,
                    count: bucket.count,
                })
            })
            .collect();

        Self {
            window_start: TimeWindow::new(Period::Weekly, now).start(),
            generated_at: now,
            categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Format the report as plain text
    pub fn format_text(&self) -> String {
        let mut output = String::from("Weekly Report:\n\n");

        for line in &self.categories {
            output.push_str(&format!(
                "{} - Max: {}, Min: {}\n",
                line.category, line.max, line.min
            ));
        }

        output
    }
}
