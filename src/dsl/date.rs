//! Relative date arithmetic: "N days ago" and "N days from now".
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tagless::dsl::{FixedClock, days, short_date};
//!
//! let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
//! let past = days(3).ago_on(&clock).unwrap();
//! let future = days(3).from_now_on(&clock).unwrap();
//!
//! assert_eq!(short_date(past), "10/16/26");
//! assert_eq!(short_date(future), "10/22/26");
//! ```

use chrono::{Local, NaiveDate, TimeDelta};
use thiserror::Error;

/// Short date format: month/day/two-digit year, no padding.
pub const SHORT_DATE_FORMAT: &str = "%-m/%-d/%y";

/// Errors from relative date arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateOffsetError {
    /// The resulting date falls outside the representable calendar.
    #[error("{count} days from {from} is outside the supported calendar range")]
    OutOfRange {
        /// The signed offset that was applied.
        count: i64,
        /// The date the offset was applied to.
        from: NaiveDate,
    },
}

/// Source of the current date.
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;
}

/// The host's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A number of days, waiting to be applied in some direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayCount(i64);

/// Starts a relative date expression: `days(3).ago()`.
pub const fn days(count: i64) -> DayCount {
    DayCount(count)
}

impl DayCount {
    /// The date this many days before `date`.
    ///
    /// # Errors
    ///
    /// Returns [`DateOffsetError::OutOfRange`] when the result is not
    /// representable.
    pub fn ago_from(self, date: NaiveDate) -> Result<NaiveDate, DateOffsetError> {
        let count = self.0.checked_neg().ok_or(DateOffsetError::OutOfRange {
            count: self.0,
            from: date,
        })?;
        shift(date, count)
    }

    /// The date this many days after `date`.
    ///
    /// # Errors
    ///
    /// Returns [`DateOffsetError::OutOfRange`] when the result is not
    /// representable.
    pub fn from_date(self, date: NaiveDate) -> Result<NaiveDate, DateOffsetError> {
        shift(date, self.0)
    }

    /// The date this many days before `clock`'s today.
    ///
    /// # Errors
    ///
    /// See [`DayCount::ago_from`].
    pub fn ago_on(self, clock: &impl Clock) -> Result<NaiveDate, DateOffsetError> {
        self.ago_from(clock.today())
    }

    /// The date this many days after `clock`'s today.
    ///
    /// # Errors
    ///
    /// See [`DayCount::from_date`].
    pub fn from_now_on(self, clock: &impl Clock) -> Result<NaiveDate, DateOffsetError> {
        self.from_date(clock.today())
    }

    /// The date this many days before today.
    ///
    /// # Errors
    ///
    /// See [`DayCount::ago_from`].
    pub fn ago(self) -> Result<NaiveDate, DateOffsetError> {
        self.ago_on(&SystemClock)
    }

    /// The date this many days after today.
    ///
    /// # Errors
    ///
    /// See [`DayCount::from_date`].
    pub fn from_now(self) -> Result<NaiveDate, DateOffsetError> {
        self.from_now_on(&SystemClock)
    }
}

fn shift(date: NaiveDate, count: i64) -> Result<NaiveDate, DateOffsetError> {
    TimeDelta::try_days(count)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(DateOffsetError::OutOfRange { count, from: date })
}

/// `count` days before today.
///
/// # Errors
///
/// See [`DayCount::ago_from`].
pub fn days_ago(count: i64) -> Result<NaiveDate, DateOffsetError> {
    days(count).ago()
}

/// `count` days after today.
///
/// # Errors
///
/// See [`DayCount::from_date`].
pub fn days_from_now(count: i64) -> Result<NaiveDate, DateOffsetError> {
    days(count).from_now()
}

/// Formats `date` in short form, e.g. `10/16/26`.
pub fn short_date(date: NaiveDate) -> String {
    date.format(SHORT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[rstest]
    #[case(0, date(2026, 10, 19))]
    #[case(3, date(2026, 10, 16))]
    #[case(19, date(2026, 9, 30))]
    #[case(-3, date(2026, 10, 22))]
    fn ago_from_moves_backwards(#[case] count: i64, #[case] expected: NaiveDate) {
        assert_eq!(days(count).ago_from(date(2026, 10, 19)), Ok(expected));
    }

    #[rstest]
    #[case(3, date(2026, 10, 22))]
    #[case(13, date(2026, 11, 1))]
    #[case(74, date(2027, 1, 1))]
    fn from_date_moves_forwards(#[case] count: i64, #[case] expected: NaiveDate) {
        assert_eq!(days(count).from_date(date(2026, 10, 19)), Ok(expected));
    }

    #[rstest]
    fn leap_day_is_counted() {
        assert_eq!(days(1).from_date(date(2028, 2, 28)), Ok(date(2028, 2, 29)));
    }

    #[rstest]
    #[case(i64::MAX)]
    #[case(i64::MIN)]
    #[case(400_000_000)]
    fn huge_offsets_are_out_of_range(#[case] count: i64) {
        assert!(matches!(
            days(count).ago_from(date(2026, 10, 19)),
            Err(DateOffsetError::OutOfRange { .. })
        ));
    }

    #[rstest]
    #[case(date(2026, 10, 16), "10/16/26")]
    #[case(date(2027, 1, 1), "1/1/27")]
    fn short_date_formats_without_padding(#[case] value: NaiveDate, #[case] expected: &str) {
        assert_eq!(short_date(value), expected);
    }

    #[rstest]
    fn system_clock_offsets_agree_with_explicit_date() {
        let today = SystemClock.today();
        let ago = days_ago(1).expect("in range");
        // Tolerate a date change between the two reads.
        assert!(ago == days(1).ago_from(today).expect("in range") || ago == today);
    }
}
