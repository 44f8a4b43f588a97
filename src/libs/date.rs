//! Calendar date primitives used by every day-accounting calculation.
//!
//! Client records store their dates as `DD/MM/YYYY` text, day first, with
//! the day and month zero-padded and the year written as-is. This module owns
//! that textual contract and the calendar arithmetic built on top of it.
//!
//! ## Features
//!
//! - **Strict Parsing**: Exactly three integer fields, rejected when the date
//!   does not exist in the calendar (e.g. `31/04/2024`)
//! - **Exact Formatting**: `format_date` is the inverse of `parse_date`
//! - **Day Arithmetic**: Calendar-correct offsets across months, years and
//!   leap days
//! - **Signed Deltas**: `days_between(a, b)` is positive when `b` is later
//!
//! ## Usage
//!
//! ```rust
//! use fitdays::libs::date::{add_days, days_between, format_date, parse_date};
//!
//! let start = parse_date("28/02/2024").unwrap();
//! let next = add_days(start, 1);
//! assert_eq!(format_date(next), "29/02/2024");
//! assert_eq!(days_between(start, next), 1);
//! ```

use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator between the day, month and year fields.
pub const DATE_SEPARATOR: char = '/';

/// Reasons a date text can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("expected DD/MM/YYYY, got {0} field(s)")]
    FieldCount(usize),
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
    #[error("{day:02}/{month:02}/{year} is not a calendar date")]
    NotACalendarDate { day: i64, month: i64, year: i64 },
}

/// A date without a time-of-day component.
///
/// Ordering, equality and hashing follow the calendar. The `Display` and
/// serde representations are the stored `DD/MM/YYYY` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from its calendar components, `None` if it does not exist.
    pub fn from_dmy(day: u32, month: u32, year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The current local date.
    ///
    /// Only the outermost caller (the command layer) should read the clock;
    /// everything below receives the result as an explicit `now`.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// The first day of the month this date falls in.
    pub fn first_of_month(&self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day(), self.month(), self.year())
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = text.split(DATE_SEPARATOR).collect();
        if fields.len() != 3 {
            return Err(DateParseError::FieldCount(fields.len()));
        }

        let mut parts = [0i64; 3];
        for (slot, field) in parts.iter_mut().zip(&fields) {
            let trimmed = field.trim();
            *slot = trimmed.parse::<i64>().map_err(|_| DateParseError::NotAnInteger(trimmed.to_string()))?;
        }
        let [day, month, year] = parts;

        // Out-of-range components never reach chrono, so a date either
        // round-trips exactly or is rejected here.
        let date = match (u32::try_from(day), u32::try_from(month), i32::try_from(year)) {
            (Ok(d), Ok(m), Ok(y)) => CalendarDate::from_dmy(d, m, y),
            _ => None,
        };
        date.ok_or(DateParseError::NotACalendarDate { day, month, year })
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses `DD/MM/YYYY` text, returning `None` for anything malformed.
pub fn parse_date(text: &str) -> Option<CalendarDate> {
    text.parse().ok()
}

/// Formats a date as zero-padded `DD/MM/YYYY`.
pub fn format_date(date: CalendarDate) -> String {
    date.to_string()
}

/// Moves a date by `n` days (negative moves backwards).
///
/// Offsets beyond chrono's representable range saturate at its bounds.
pub fn add_days(date: CalendarDate, n: i64) -> CalendarDate {
    TimeDelta::try_days(n)
        .and_then(|delta| date.0.checked_add_signed(delta))
        .map(CalendarDate)
        .unwrap_or(if n >= 0 { CalendarDate(NaiveDate::MAX) } else { CalendarDate(NaiveDate::MIN) })
}

/// Signed number of days from `a` to `b`; zero when they are the same day.
pub fn days_between(a: CalendarDate, b: CalendarDate) -> i64 {
    b.0.signed_duration_since(a.0).num_days()
}

/// Parses either the keyword `today` or a `DD/MM/YYYY` date.
///
/// This is the command-line entry point; `today` is the only place the
/// wall clock is consulted.
pub fn parse_date_arg(text: &str, today: CalendarDate) -> Result<CalendarDate, DateParseError> {
    if text.trim().eq_ignore_ascii_case("today") {
        Ok(today)
    } else {
        text.trim().parse()
    }
}

/// Number of days in the given month, `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Parses a `MM/YYYY` month into `(year, month)`.
pub fn parse_month(text: &str) -> Option<(i32, u32)> {
    let (month, year) = text.trim().split_once(DATE_SEPARATOR)?;
    let month: u32 = month.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;
    days_in_month(year, month).map(|_| (year, month))
}
