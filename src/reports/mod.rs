//! Reports module for the expense tracker
//!
//! The reporting engine: time window filtering, category aggregation, the
//! weekly and monthly reports, and the facade the front end calls.

pub mod aggregate;
pub mod amount;
pub mod facade;
pub mod monthly;
pub mod weekly;
pub mod window;

pub use aggregate::{aggregate, Aggregation, AggregationMode, CategoryAggregate};
pub use amount::format_amount;
pub use facade::{CsvExport, ExpenseReports, MonthlyOutput};
pub use monthly::{CategoryTotal, MonthlyReport};
pub use weekly::{CategoryExtremes, WeeklyReport};
pub use window::{in_window, CalendarMonth, DateFilter, TimeWindow};
