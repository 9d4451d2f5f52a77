//! Reporting facade
//!
//! Each entry point opens a fresh cursor, drains it, keeps the session
//! user's records that fall inside the window, and formats the result.
//! Nothing here writes to the store.

use chrono::NaiveDateTime;

use crate::error::ExpenseResult;
use crate::export::expenses_csv_string;
use crate::models::{ExpenseRecord, ExportPeriod, Period, Session};
use crate::storage::ExpenseStore;

use super::monthly::MonthlyReport;
use super::weekly::WeeklyReport;
use super::window::{CalendarMonth, DateFilter, TimeWindow};

/// Monthly report text together with its CSV download
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyOutput {
    pub text: String,
    pub csv: String,
    pub file_name: String,
    pub total_spent: f64,
}

/// Raw CSV export for a period
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub csv: String,
    pub file_name: String,
    pub rows: usize,
}

/// Report entry points over any expense store
pub struct ExpenseReports<'a, S: ExpenseStore + ?Sized> {
    store: &'a S,
    currency_symbol: String,
}

impl<'a, S: ExpenseStore + ?Sized> ExpenseReports<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            currency_symbol: "$".to_string(),
        }
    }

    /// Use a different currency symbol in the monthly text
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Weekly max/min text
    pub fn weekly_report(&self, session: &Session, now: NaiveDateTime) -> ExpenseResult<String> {
        Ok(self.weekly(session, now)?.format_text())
    }

    /// Weekly report over the rolling seven-day window
    pub fn weekly(&self, session: &Session, now: NaiveDateTime) -> ExpenseResult<WeeklyReport> {
        let records = self.collect(session, &TimeWindow::new(Period::Weekly, now))?;
        let report = WeeklyReport::from_records(&records, now);

        tracing::info!(
            user = session.username(),
            records = records.len(),
            categories = report.categories.len(),
            "weekly report generated"
        );
        Ok(report)
    }

    /// Monthly text, CSV and download name
    pub fn monthly_report(&self, session: &Session, now: NaiveDateTime) -> ExpenseResult<MonthlyOutput> {
        let report = self.monthly(session, now)?;

        Ok(MonthlyOutput {
            text: report.format_text(&self.currency_symbol),
            csv: report.csv_string()?,
            file_name: report.file_name(),
            total_spent: report.total_spent,
        })
    }

    /// Monthly report over the calendar month containing `now`
    pub fn monthly(&self, session: &Session, now: NaiveDateTime) -> ExpenseResult<MonthlyReport> {
        let records = self.collect(session, &CalendarMonth::of(now))?;
        let report = MonthlyReport::from_records(&records, now);

        tracing::info!(
            user = session.username(),
            records = records.len(),
            total = report.total_spent,
            "monthly report generated"
        );
        Ok(report)
    }

    /// Raw rows for the last week or month as CSV
    pub fn export_csv(
        &self,
        session: &Session,
        now: NaiveDateTime,
        period: ExportPeriod,
    ) -> ExpenseResult<CsvExport> {
        let records = self.collect(session, &TimeWindow::new(period.window(), now))?;

        tracing::info!(
            user = session.username(),
            period = %period,
            rows = records.len(),
            "csv export generated"
        );
        Ok(CsvExport {
            csv: expenses_csv_string(&records)?,
            file_name: period.file_name(),
            rows: records.len(),
        })
    }

    /// Records for a table view, in insertion order
    pub fn view_table(
        &self,
        session: &Session,
        now: NaiveDateTime,
        period: Period,
    ) -> ExpenseResult<Vec<ExpenseRecord>> {
        self.collect(session, &TimeWindow::new(period, now))
    }

    /// Drain a fresh cursor, keeping the session's records inside `filter`
    ///
    /// A cursor error aborts the scan; records already seen are dropped.
    fn collect<F: DateFilter>(&self, session: &Session, filter: &F) -> ExpenseResult<Vec<ExpenseRecord>> {
        let mut matched = Vec::new();
        let mut scanned = 0usize;

        for item in self.store.open_read_cursor()? {
            let record = item?;
            scanned += 1;

            if !record.belongs_to(session) {
                continue;
            }

            match record.parsed_date() {
                Some(date) if filter.contains(date) => matched.push(record),
                Some(_) => {}
                None => {
                    tracing::warn!(
                        id = %record.id,
                        date = %record.date,
                        "unparseable expense date, excluded from report"
                    );
                }
            }
        }

        tracing::debug!(scanned, matched = matched.len(), "expense scan complete");
        Ok(matched)
    }
}
