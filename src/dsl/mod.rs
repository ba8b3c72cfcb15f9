//! A tiny DSL for relative dates.

mod date;

pub use date::{
    Clock, DateOffsetError, DayCount, FixedClock, SHORT_DATE_FORMAT, SystemClock, days,
    days_ago, days_from_now, short_date,
};
