//! Day-state derivation for a client's current package.
//!
//! [`analyze`] turns a [`ClientSnapshot`] into a [`DayAnalysis`]: which day of
//! the package the client is on, how much is left, and where the package will
//! end once pauses are taken into account.
//!
//! ## Accounting Formula
//!
//! ```text
//! days_elapsed        = max(0, days_between(start, now))
//! effective_days_used = max(0, days_elapsed - total_paused)
//! current_day         = min(effective_days_used + 1, package_days)
//! days_remaining      = max(0, package_days - effective_days_used)
//! expected_end_date   = start + (package_days + total_paused - 1)
//! ```
//!
//! Running packages (active, paused) never report a current day below 1.
//! A stopped package with a recorded stop date is analysed as of that date
//! when `now` is later, so its figures stay where the stop left them.
//! The status flags mirror the stored status; completion by date is a
//! separate question answered by [`should_complete`].

use crate::libs::client::{ClientSnapshot, ClientStatus};
use crate::libs::date::{add_days, days_between, CalendarDate};
use crate::libs::pause::PauseHistory;
use serde::Serialize;

/// Derived progress of one package at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAnalysis {
    /// 1-based day of the package, capped at `package_days`.
    pub current_day: i64,
    /// Calendar days since the start, never negative.
    pub days_elapsed: i64,
    /// Elapsed days minus paused days, never negative.
    pub effective_days_used: i64,
    pub days_remaining: i64,
    pub total_paused_days: i64,
    /// Whole percent in `[0, 100]`.
    pub progress_percent: i64,
    pub is_completed: bool,
    pub is_paused: bool,
    pub is_stopped: bool,
    pub is_active: bool,
    /// Package end shifted by the paused days.
    pub expected_end_date: CalendarDate,
    /// Package end as if there had been no pauses.
    pub original_end_date: CalendarDate,
    pub package_days: i64,
    pub status: ClientStatus,
}

/// Derives the day state of `snapshot` as of `now`.
pub fn analyze(snapshot: &ClientSnapshot, now: CalendarDate) -> DayAnalysis {
    let now = match (snapshot.status, snapshot.stopped_on) {
        (ClientStatus::Stopped, Some(stopped_on)) => now.min(stopped_on),
        _ => now,
    };
    let package_days = snapshot.package_days;
    let total_paused_days = snapshot.pause_history.total_paused_days(now);
    let days_elapsed = days_between(snapshot.start_date, now).max(0);
    let effective_days_used = (days_elapsed - total_paused_days).max(0);

    let mut current_day = (effective_days_used + 1).min(package_days);
    if snapshot.status.is_running() {
        current_day = current_day.max(1);
    }

    let progress_percent = if package_days <= 0 {
        0
    } else {
        ((effective_days_used as f64 / package_days as f64) * 100.0).round().clamp(0.0, 100.0) as i64
    };

    let analysis = DayAnalysis {
        current_day,
        days_elapsed,
        effective_days_used,
        days_remaining: (package_days - effective_days_used).max(0),
        total_paused_days,
        progress_percent,
        is_completed: effective_days_used >= package_days,
        is_paused: snapshot.status == ClientStatus::Paused,
        is_stopped: snapshot.status == ClientStatus::Stopped,
        is_active: snapshot.status == ClientStatus::Active,
        expected_end_date: add_days(snapshot.start_date, package_days + total_paused_days - 1),
        original_end_date: add_days(snapshot.start_date, package_days - 1),
        package_days,
        status: snapshot.status,
    };

    tracing::debug!(
        start = %snapshot.start_date,
        now = %now,
        current_day = analysis.current_day,
        effective_days_used = analysis.effective_days_used,
        total_paused_days = analysis.total_paused_days,
        "derived day analysis"
    );

    analysis
}

/// Whether a running package has used up all of its days as of `now`.
///
/// Stopped and already-completed snapshots never signal a transition.
pub fn should_complete(snapshot: &ClientSnapshot, now: CalendarDate) -> bool {
    snapshot.status.is_running() && analyze(snapshot, now).is_completed
}

impl DayAnalysis {
    /// One-line, human-readable status for lists and detail views.
    pub fn status_text(&self) -> String {
        if self.is_stopped {
            return format!("Stopped on day {} of {}", self.current_day, self.package_days);
        }
        if self.status == ClientStatus::Completed || self.is_completed {
            return format!("Package completed ({} days)", self.package_days);
        }
        if self.is_paused {
            return format!("Paused on day {} of {}", self.current_day, self.package_days);
        }
        match self.days_remaining {
            1 => format!("Day {} of {}, 1 day left", self.current_day, self.package_days),
            left => format!("Day {} of {}, {} days left", self.current_day, self.package_days, left),
        }
    }
}
