//! Date windows for the dashboard's reporting controls.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Inclusive date range selected by the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> CoreResult<Self> {
        if from > to {
            return Err(CoreError::InvalidWindow { from, to });
        }
        Ok(Self { from, to })
    }

    /// The documented default window: March 1-31, 2024.
    pub fn default_window() -> Self {
        Self {
            from: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
            to: NaiveDate::from_ymd_opt(2024, 3, 31).expect("valid date"),
        }
    }

    /// Number of days covered, inclusive of both endpoints.
    pub fn day_count(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    /// Dates of the window in order, starting at `from`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let from = self.from;
        (0..self.day_count()).map(move |i| from + Duration::days(i))
    }

    /// Calendar month (1-12) the window starts in.
    pub fn start_month(&self) -> u32 {
        self.from.month()
    }

    /// Whether either endpoint falls in the given calendar month (1-12).
    pub fn touches_month(&self, month: u32) -> bool {
        self.from.month() == month || self.to.month() == month
    }
}

/// Short label like "Mar 4" used on chart axes.
pub fn short_day_label(date: NaiveDate) -> String {
    format!("{} {}", month_abbrev(date.month()), date.day())
}

pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_march_2024() {
        let w = DateWindow::default_window();
        assert_eq!(w.start_month(), 3);
        assert_eq!(w.day_count(), 31);
    }

    #[test]
    fn rejects_inverted_window() {
        let from = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert!(DateWindow::new(from, to).is_err());
    }

    #[test]
    fn day_labels() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(short_day_label(date), "Mar 4");
    }

    #[test]
    fn weekend_detection() {
        // 2024-03-02 was a Saturday.
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()));
    }
}
