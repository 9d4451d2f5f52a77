//! Expense record model
//!
//! Records are write-once. The `date` field keeps the exact string the user
//! entered; `parsed_date` interprets it for window comparisons.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::user::Session;

/// Date-time string layouts accepted for an expense date
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts; these resolve to midnight
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// A stored expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Store-assigned surrogate key
    pub id: ExpenseId,

    /// Owner's username
    pub user: String,

    /// Amount spent (negative values are kept as-is)
    pub amount: f64,

    /// Free-form payment method label
    pub payment_method: String,

    /// Free-form category label, the grouping key for reports
    pub category: String,

    /// Date as entered
    pub date: String,

    /// When the record was stored
    pub created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Build a record from an insert request
    pub fn from_new(id: ExpenseId, new: NewExpense) -> Self {
        Self {
            id,
            user: new.user,
            amount: new.amount,
            payment_method: new.payment_method,
            category: new.category,
            date: new.date,
            created_at: Utc::now(),
        }
    }

    /// Interpret `date`, or `None` if it matches no accepted layout
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_expense_date(&self.date)
    }

    /// Check whether this record belongs to the session's user
    pub fn belongs_to(&self, session: &Session) -> bool {
        self.user == session.username()
    }
}

/// An expense waiting for the store to assign its id
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub user: String,
    pub amount: f64,
    pub payment_method: String,
    pub category: String,
    pub date: String,
}

/// Parse an expense date string as a naive local date-time
///
/// RFC 3339 strings keep their wall-clock time and drop the offset.
pub fn parse_expense_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, sec)
            .unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_expense_date("2026-10-15"), Some(at(2026, 10, 15, 0, 0, 0)));
    }

    #[test]
    fn test_parse_locale_date() {
        assert_eq!(parse_expense_date("10/15/2026"), Some(at(2026, 10, 15, 0, 0, 0)));
    }

    #[test]
    fn test_parse_date_time_forms() {
        assert_eq!(
            parse_expense_date("2026-10-15T08:30:05"),
            Some(at(2026, 10, 15, 8, 30, 5))
        );
        assert_eq!(
            parse_expense_date("2026-10-15 08:30:05"),
            Some(at(2026, 10, 15, 8, 30, 5))
        );
        assert_eq!(
            parse_expense_date("2026-10-15T08:30"),
            Some(at(2026, 10, 15, 8, 30, 0))
        );
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_time() {
        assert_eq!(
            parse_expense_date("2026-10-15T23:10:00+05:00"),
            Some(at(2026, 10, 15, 23, 10, 0))
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_expense_date(""), None);
        assert_eq!(parse_expense_date("yesterday"), None);
        assert_eq!(parse_expense_date("2026-13-40"), None);
    }

    #[test]
    fn test_belongs_to() {
        let record = ExpenseRecord::from_new(
            ExpenseId::FIRST,
            NewExpense {
                user: "alice".into(),
                amount: 12.5,
                payment_method: "Card".into(),
                category: "Food".into(),
                date: "2026-10-15".into(),
            },
        );

        assert!(record.belongs_to(&Session::new("alice")));
        assert!(!record.belongs_to(&Session::new("bob")));
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = ExpenseRecord::from_new(
            ExpenseId::new(9),
            NewExpense {
                user: "alice".into(),
                amount: 3.25,
                payment_method: "Cash".into(),
                category: "Coffee".into(),
                date: "2026-10-01".into(),
            },
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
