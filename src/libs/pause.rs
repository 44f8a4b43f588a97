//! Pause intervals and the accounting that excludes them from package time.
//!
//! A pause suspends a package's clock from the day it starts until the day
//! the client resumes. Closed pauses count `days_between(start, end)` days;
//! an open pause counts up to `now`, not up to the package end.
//!
//! Histories come from two places: the live client record and packages that
//! were archived on renewal. Both are read through the [`PauseHistory`] trait
//! so every calculation runs through one code path.
//!
//! Overlapping or inverted intervals are not validated here. Overlaps are
//! counted twice and an inverted closed interval contributes a negative
//! count; both are data-quality issues for the storage layer.

use crate::libs::date::{days_between, parse_date, CalendarDate};
use serde::{Deserialize, Serialize};

/// One pause-to-resume cycle. `end == None` means the client is still paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseInterval {
    pub start: CalendarDate,
    pub end: Option<CalendarDate>,
}

impl PauseInterval {
    pub fn closed(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end: Some(end) }
    }

    pub fn open(start: CalendarDate) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// A pause row as stored: raw `DD/MM/YYYY` text straight from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseRecord {
    pub id: i64,
    pub paused_at: String,
    pub resumed_at: Option<String>,
}

impl PauseRecord {
    /// The interval this row describes, or `None` if any of its dates is malformed.
    pub fn interval(&self) -> Option<PauseInterval> {
        let start = parse_date(&self.paused_at)?;
        let end = match &self.resumed_at {
            Some(text) => Some(parse_date(text)?),
            None => None,
        };
        Some(PauseInterval { start, end })
    }
}

/// Days a single interval removes from the package clock.
pub fn paused_days_for(interval: &PauseInterval, now: CalendarDate) -> i64 {
    match interval.end {
        Some(end) => days_between(interval.start, end),
        None => days_between(interval.start, now),
    }
}

/// A source of pause intervals, live or archived.
///
/// Implementors only list their well-formed intervals; the accounting is
/// provided on top of that.
pub trait PauseHistory {
    /// Every well-formed interval, in stored order.
    fn intervals(&self) -> Vec<PauseInterval>;

    /// Sum of paused days over every interval; open pauses count up to `now`.
    fn total_paused_days(&self, now: CalendarDate) -> i64 {
        self.intervals().iter().map(|interval| paused_days_for(interval, now)).sum()
    }

    /// Whether `date` lies in `[start, end)` of any closed interval.
    ///
    /// Open intervals are ignored: this answers calendar questions about
    /// resolved history, not live status.
    fn is_date_paused(&self, date: CalendarDate) -> bool {
        self.intervals()
            .iter()
            .any(|interval| matches!(interval.end, Some(end) if interval.start <= date && date < end))
    }

    /// Paused days from closed intervals that were resumed on or before `date`.
    fn paused_days_resolved_by(&self, date: CalendarDate) -> i64 {
        self.intervals()
            .iter()
            .filter_map(|interval| interval.end.filter(|end| *end <= date).map(|end| days_between(interval.start, end)))
            .sum()
    }

    /// The most recent interval that is still open, if any.
    fn open_interval(&self) -> Option<PauseInterval> {
        self.intervals().into_iter().rev().find(PauseInterval::is_open)
    }
}

impl PauseHistory for [PauseInterval] {
    fn intervals(&self) -> Vec<PauseInterval> {
        self.to_vec()
    }
}

impl PauseHistory for [PauseRecord] {
    fn intervals(&self) -> Vec<PauseInterval> {
        self.iter()
            .filter_map(|record| {
                let interval = record.interval();
                if interval.is_none() {
                    tracing::warn!(pause_id = record.id, "skipping pause record with a malformed date");
                }
                interval
            })
            .collect()
    }
}

impl<T> PauseHistory for Vec<T>
where
    [T]: PauseHistory,
{
    fn intervals(&self) -> Vec<PauseInterval> {
        self.as_slice().intervals()
    }
}

/// Total paused days over a history; zero for an empty one.
pub fn total_paused_days<H: PauseHistory + ?Sized>(history: &H, now: CalendarDate) -> i64 {
    history.total_paused_days(now)
}

/// Whether `date` falls inside a closed pause of `history`.
pub fn is_date_paused<H: PauseHistory + ?Sized>(date: CalendarDate, history: &H) -> bool {
    history.is_date_paused(date)
}

/// Display-ready pause row.
#[derive(Debug, Clone, Serialize)]
pub struct FormattedPause {
    pub id: i32,
    pub start: String,
    pub end: String,
    pub days: String,
}

/// Formats a collection of pauses for table display.
pub trait PauseGroup {
    fn format(&self, now: CalendarDate) -> Vec<FormattedPause>;
}

impl<H: PauseHistory + ?Sized> PauseGroup for H {
    fn format(&self, now: CalendarDate) -> Vec<FormattedPause> {
        self.intervals()
            .iter()
            .enumerate()
            .map(|(index, interval)| FormattedPause {
                id: (index + 1) as i32,
                start: interval.start.to_string(),
                end: interval.end.map_or_else(|| "-".to_string(), |end| end.to_string()),
                days: match interval.end {
                    Some(_) => paused_days_for(interval, now).to_string(),
                    None => format!("{} (open)", paused_days_for(interval, now)),
                },
            })
            .collect()
    }
}
