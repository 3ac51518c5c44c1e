//! Calendar window computation for filtered appointment queries.
//!
//! The month and week filters are defined as half-open date windows computed
//! in Rust with `jiff` and bound as plain parameters, instead of leaning on
//! vendor-specific SQL date functions (MONTHNAME, YEARWEEK, LAST_DAY). This
//! keeps the queries portable and lets tests pin "today" to a fixed date.

use jiff::civil::{Date, DateTime};
use jiff::ToSpan;

/// A half-open date window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// First day inside the window
    pub start: Date,
    /// First day past the window
    pub end: Date,
}

impl DateWindow {
    /// Window start as a civil datetime (midnight).
    pub fn start_at(&self) -> DateTime {
        self.start.at(0, 0, 0, 0)
    }

    /// Window end as a civil datetime (midnight, exclusive).
    pub fn end_at(&self) -> DateTime {
        self.end.at(0, 0, 0, 0)
    }

    /// Whether the given instant falls inside the window.
    pub fn contains(&self, at: DateTime) -> bool {
        self.start_at() <= at && at < self.end_at()
    }
}

/// The calendar month containing `today`:
/// `[first of month, first of next month)`.
pub fn month_window(today: Date) -> DateWindow {
    let start = today.first_of_month();
    DateWindow {
        start,
        end: start.saturating_add(1.month()),
    }
}

/// The ISO-8601 week containing `today`: `[Monday, next Monday)`.
pub fn iso_week_window(today: Date) -> DateWindow {
    let offset = today.weekday().to_monday_zero_offset();
    let start = today.saturating_sub((i64::from(offset)).days());
    DateWindow {
        start,
        end: start.saturating_add(7.days()),
    }
}
