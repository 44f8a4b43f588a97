//! Package-scoped day numbers for calendars of current and past packages.
//!
//! A client who renews gets a fresh package; the old one is archived with its
//! own start date and its own pause history frozen at renewal time. Calendars
//! resolve every cell against one such package snapshot, never against the
//! client's live record.

use crate::libs::client::{ClientSnapshot, ClientStatus};
use crate::libs::date::{add_days, days_between, days_in_month, CalendarDate};
use crate::libs::pause::{PauseHistory, PauseInterval};
use serde::Serialize;

/// A package frozen at some point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSnapshot {
    /// 1-based package number within the client's history.
    pub number: i64,
    pub start_date: CalendarDate,
    pub package_days: i64,
    pub end_date: CalendarDate,
    pub status: ClientStatus,
    pub pause_history: Vec<PauseInterval>,
    pub stopped_on: Option<CalendarDate>,
}

impl PackageSnapshot {
    /// Views a live client snapshot as its current package.
    pub fn from_client(number: i64, snapshot: &ClientSnapshot) -> Self {
        Self {
            number,
            start_date: snapshot.start_date,
            package_days: snapshot.package_days,
            end_date: snapshot.end_date,
            status: snapshot.status,
            pause_history: snapshot.pause_history.clone(),
            stopped_on: snapshot.stopped_on,
        }
    }

    /// The same package in the shape the day analysis expects.
    pub fn as_client_snapshot(&self) -> ClientSnapshot {
        ClientSnapshot {
            start_date: self.start_date,
            package_days: self.package_days,
            end_date: self.end_date,
            status: self.status,
            pause_history: self.pause_history.clone(),
            stopped_on: self.stopped_on,
        }
    }

    /// Day number of `date` within this package.
    pub fn day_number_for(&self, date: CalendarDate) -> Option<i64> {
        day_number_for(date, self.start_date, &self.pause_history)
    }

    /// How a calendar cell for `date` should be marked.
    pub fn mark_for(&self, date: CalendarDate) -> DayMark {
        if date < self.start_date {
            return DayMark::BeforeStart;
        }
        if self.pause_history.is_date_paused(date) {
            return DayMark::Paused;
        }
        match self.day_number_for(date) {
            Some(day) if day <= self.package_days => DayMark::Day(day),
            _ => DayMark::AfterPackage,
        }
    }

    /// Marks for every day of the given month.
    pub fn month_marks(&self, year: i32, month: u32) -> Vec<(CalendarDate, DayMark)> {
        month_marks(year, month, self)
    }
}

/// Calendar cell classification relative to one package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayMark {
    BeforeStart,
    /// Inside a resolved pause; rendered struck through.
    Paused,
    /// An active day of the package.
    Day(i64),
    AfterPackage,
}

/// Which day of a package `date` falls on.
///
/// Only pauses resumed on or before `date` are subtracted; open pauses and
/// pauses still running at `date` are not. `None` before the start date or
/// when the result is not positive.
pub fn day_number_for<H: PauseHistory + ?Sized>(
    date: CalendarDate,
    package_start: CalendarDate,
    package_pause_history: &H,
) -> Option<i64> {
    if date < package_start {
        return None;
    }
    let elapsed = days_between(package_start, date);
    let paused_before = package_pause_history.paused_days_resolved_by(date);
    let day = elapsed - paused_before + 1;
    (day > 0).then_some(day)
}

/// Marks for every day of `month` in `year`; empty for an invalid month.
pub fn month_marks(year: i32, month: u32, package: &PackageSnapshot) -> Vec<(CalendarDate, DayMark)> {
    let Some(first) = CalendarDate::from_dmy(1, month, year) else {
        return Vec::new();
    };
    let len = days_in_month(year, month).unwrap_or(0);
    (0..i64::from(len))
        .map(|offset| {
            let date = add_days(first, offset);
            (date, package.mark_for(date))
        })
        .collect()
}
