//! Time window filtering
//!
//! Every window is derived from one immutable snapshot of "now". Rolling
//! windows have an inclusive lower bound and no upper bound, so future-dated
//! records are in every rolling window.

use chrono::{Datelike, Duration, Months, NaiveDateTime};

use crate::models::Period;

/// Something that decides whether a record date is in scope for a report
pub trait DateFilter {
    fn contains(&self, record_date: NaiveDateTime) -> bool;
}

/// A rolling window ending at `now`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    period: Period,
    now: NaiveDateTime,
    start: NaiveDateTime,
}

impl TimeWindow {
    /// Compute the window for `period` ending at `now`
    pub fn new(period: Period, now: NaiveDateTime) -> Self {
        let start = match period {
            Period::Daily => now.date().and_time(chrono::NaiveTime::MIN),
            Period::Weekly => now
                .checked_sub_signed(Duration::days(7))
                .unwrap_or(NaiveDateTime::MIN),
            Period::Monthly => months_before(now, 1),
            Period::Yearly => months_before(now, 12),
        };

        Self { period, now, start }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Earliest date-time inside the window
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }
}

impl DateFilter for TimeWindow {
    fn contains(&self, record_date: NaiveDateTime) -> bool {
        match self.period {
            Period::Daily => record_date.date() == self.now.date(),
            Period::Weekly | Period::Monthly | Period::Yearly => record_date >= self.start,
        }
    }
}

/// Exact calendar month match, used by the monthly report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    /// The calendar month containing `now`
    pub fn of(now: NaiveDateTime) -> Self {
        Self {
            year: now.year(),
            month: now.month(),
        }
    }
}

impl DateFilter for CalendarMonth {
    fn contains(&self, record_date: NaiveDateTime) -> bool {
        record_date.year() == self.year && record_date.month() == self.month
    }
}

/// Check a single record date against a period ending at `now`
pub fn in_window(record_date: NaiveDateTime, now: NaiveDateTime, period: Period) -> bool {
    TimeWindow::new(period, now).contains(record_date)
}

/// `now` moved back by whole calendar months, clamping the day to the
/// target month's length (Mar 31 -> Feb 28)
fn months_before(now: NaiveDateTime, months: u32) -> NaiveDateTime {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDateTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_daily_ignores_time_of_day() {
        let now = at(2026, 10, 15, 9, 0, 0);
        assert!(in_window(at(2026, 10, 15, 0, 0, 0), now, Period::Daily));
        assert!(in_window(at(2026, 10, 15, 23, 59, 59), now, Period::Daily));
        assert!(!in_window(at(2026, 10, 14, 23, 59, 59), now, Period::Daily));
        assert!(!in_window(at(2025, 10, 15, 9, 0, 0), now, Period::Daily));
    }

    #[test]
    fn test_weekly_boundary_is_inclusive() {
        let now = at(2026, 10, 15, 12, 0, 0);
        let exactly_seven_days = at(2026, 10, 8, 12, 0, 0);
        let one_second_more = at(2026, 10, 8, 11, 59, 59);

        assert!(in_window(exactly_seven_days, now, Period::Weekly));
        assert!(!in_window(one_second_more, now, Period::Weekly));
    }

    #[test]
    fn test_monthly_clamps_to_shorter_month() {
        let now = at(2026, 3, 31, 10, 0, 0);
        let window = TimeWindow::new(Period::Monthly, now);
        assert_eq!(window.start(), at(2026, 2, 28, 10, 0, 0));

        assert!(window.contains(at(2026, 2, 28, 10, 0, 0)));
        assert!(!window.contains(at(2026, 2, 27, 23, 0, 0)));
    }

    #[test]
    fn test_yearly_window() {
        let now = at(2028, 2, 29, 0, 0, 0);
        let window = TimeWindow::new(Period::Yearly, now);
        assert_eq!(window.start(), at(2027, 2, 28, 0, 0, 0));
        assert!(window.contains(at(2027, 6, 1, 0, 0, 0)));
        assert!(!window.contains(at(2027, 2, 27, 0, 0, 0)));
    }

    #[test]
    fn test_future_dates_are_in_rolling_windows() {
        let now = at(2026, 10, 15, 12, 0, 0);
        let tomorrow = at(2026, 10, 16, 0, 0, 0);
        assert!(in_window(tomorrow, now, Period::Weekly));
        assert!(!in_window(tomorrow, now, Period::Daily));
    }

    #[test]
    fn test_windows_do_not_share_state() {
        let now = at(2026, 10, 15, 12, 0, 0);
        let weekly = TimeWindow::new(Period::Weekly, now);
        let monthly = TimeWindow::new(Period::Monthly, now);
        let yearly = TimeWindow::new(Period::Yearly, now);

        assert_eq!(weekly.now(), now);
        assert_eq!(monthly.now(), now);
        assert_eq!(monthly.start(), at(2026, 9, 15, 12, 0, 0));
        assert_eq!(yearly.start(), at(2025, 10, 15, 12, 0, 0));
    }

    #[test]
    fn test_calendar_month() {
        let month = CalendarMonth::of(at(2026, 10, 15, 12, 0, 0));
        assert!(month.contains(at(2026, 10, 1, 0, 0, 0)));
        assert!(month.contains(at(2026, 10, 31, 23, 59, 59)));
        assert!(!month.contains(at(2026, 9, 30, 23, 59, 59)));
        assert!(!month.contains(at(2025, 10, 15, 12, 0, 0)));
    }
}
