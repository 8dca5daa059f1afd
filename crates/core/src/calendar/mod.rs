//! Calendar month sizing and date helpers.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use vhts_shared::{AppError, AppResult};

/// A calendar month under the dashboard's zero-based month convention.
///
/// The upstream API and its persisted payloads index months 0-11
/// (January = 0), so that convention is kept at the boundary; conversions to
/// chrono's 1-based months happen internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthRef {
    year: i32,
    month0: u32,
}

impl MonthRef {
    /// Creates a month reference from a zero-based month index and a year.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if `month0` is not in `0..12`.
    pub fn new(month0: u32, year: i32) -> AppResult<Self> {
        if month0 >= 12 {
            return Err(AppError::Validation(format!(
                "month index out of range: {month0}"
            )));
        }
        Ok(Self { year, month0 })
    }

    /// The zero-based month index (0-11).
    #[must_use]
    pub const fn month0(self) -> u32 {
        self.month0
    }

    /// The four-digit year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Number of days in this month (28-31), leap-year correct.
    ///
    /// Computed as the first day of the next month minus one day.
    #[must_use]
    pub fn day_count(self) -> u32 {
        let (next_year, next_month) = if self.month0 == 11 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month0 + 2)
        };
        // month0 is validated at construction; chrono only fails outside its
        // representable year range.
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first| first.pred_opt())
            .map_or(0, |last| last.day())
    }

    /// Calendar date for a 1-based day of this month.
    #[must_use]
    pub fn date_of(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
    }

    /// Midnight UTC on a 1-based day of this month, as used on the wire.
    #[must_use]
    pub fn midnight_utc(self, day: u32) -> Option<DateTime<Utc>> {
        self.date_of(day)
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month0 + 1)
    }
}
