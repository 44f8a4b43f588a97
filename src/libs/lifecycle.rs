//! Client lifecycle transitions over snapshots.
//!
//! Each function takes the current [`ClientSnapshot`] and returns the next
//! one; nothing is persisted here. The storage layer loads a snapshot, applies
//! a transition and writes the result back inside one transaction.
//!
//! ```text
//!            pause             resume
//!   Active ────────▶ Paused ─────────▶ Active ──(days used up)──▶ Completed
//!     │                 │
//!     └──── stop ───────┴──────▶ Stopped
//!
//!   any status ── renew ──▶ Active (new package, previous one archived
//!                                   as completed or stopped)
//! ```

use crate::libs::analysis::{analyze, should_complete};
use crate::libs::client::{ClientSnapshot, ClientStatus};
use crate::libs::date::{add_days, CalendarDate};
use crate::libs::package::PackageSnapshot;
use crate::libs::pause::{PauseHistory, PauseInterval};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("package length must be at least one day, got {0}")]
    InvalidPackageDays(i64),
    #[error("cannot {action} a client whose package is {status}")]
    InvalidTransition { action: &'static str, status: ClientStatus },
    #[error("client has no open pause to resume")]
    NoOpenPause,
    #[error("resume date {resumed} is before the pause started on {paused}")]
    ResumeBeforePause { paused: CalendarDate, resumed: CalendarDate },
    #[error("pause date {paused} is before the package started on {start}")]
    PauseBeforeStart { start: CalendarDate, paused: CalendarDate },
    #[error("pause date {paused} falls inside an earlier pause that ended on {resumed}")]
    PauseOverlapsPrevious { resumed: CalendarDate, paused: CalendarDate },
}

/// Result of a transition that may also complete the package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub snapshot: ClientSnapshot,
    /// The package was flipped to completed by this transition.
    pub completed: bool,
}

/// Starts a fresh package on `start`.
pub fn new_package(start: CalendarDate, package_days: i64) -> Result<ClientSnapshot, LifecycleError> {
    if package_days <= 0 {
        return Err(LifecycleError::InvalidPackageDays(package_days));
    }
    Ok(ClientSnapshot {
        start_date: start,
        package_days,
        end_date: add_days(start, package_days - 1),
        status: ClientStatus::Active,
        pause_history: Vec::new(),
        stopped_on: None,
    })
}

/// Pauses an active package starting on `on`.
///
/// The pause may not start before the package or before the latest earlier
/// pause was resumed; starting on the resume day itself is fine.
pub fn pause(snapshot: &ClientSnapshot, on: CalendarDate) -> Result<ClientSnapshot, LifecycleError> {
    if snapshot.status != ClientStatus::Active {
        return Err(LifecycleError::InvalidTransition { action: "pause", status: snapshot.status });
    }
    if on < snapshot.start_date {
        return Err(LifecycleError::PauseBeforeStart { start: snapshot.start_date, paused: on });
    }
    if let Some(resumed) = snapshot.pause_history.iter().filter_map(|interval| interval.end).max() {
        if on < resumed {
            return Err(LifecycleError::PauseOverlapsPrevious { resumed, paused: on });
        }
    }
    let mut next = snapshot.clone();
    next.pause_history.push(PauseInterval::open(on));
    next.status = ClientStatus::Paused;
    Ok(next)
}

/// Resumes a paused package on `on`, extending its end date by the pause.
pub fn resume(snapshot: &ClientSnapshot, on: CalendarDate, now: CalendarDate) -> Result<Transition, LifecycleError> {
    if snapshot.status != ClientStatus::Paused {
        return Err(LifecycleError::InvalidTransition { action: "resume", status: snapshot.status });
    }
    let mut next = snapshot.clone();
    close_open_pause(&mut next.pause_history, on)?;
    next.status = ClientStatus::Active;
    next.end_date = analyze(&next, now).expected_end_date;
    Ok(refresh(&next, now))
}

/// Stops a running package for good on `on`, closing any open pause.
pub fn stop(snapshot: &ClientSnapshot, on: CalendarDate) -> Result<ClientSnapshot, LifecycleError> {
    if !snapshot.status.is_running() {
        return Err(LifecycleError::InvalidTransition { action: "stop", status: snapshot.status });
    }
    let mut next = snapshot.clone();
    if snapshot.status == ClientStatus::Paused {
        close_open_pause(&mut next.pause_history, on)?;
    }
    next.status = ClientStatus::Stopped;
    next.stopped_on = Some(on);
    Ok(next)
}

/// Archives the current package as package `number` on `on` and starts a new one.
///
/// An archived package always ends in a terminal status. A running package
/// whose days are used up by `on` is archived as completed; any other running
/// package is archived as stopped on `on`. Pauses are kept exactly as they are.
pub fn renew(
    snapshot: &ClientSnapshot,
    number: i64,
    start: CalendarDate,
    package_days: i64,
    on: CalendarDate,
) -> Result<(PackageSnapshot, ClientSnapshot), LifecycleError> {
    let fresh = new_package(start, package_days)?;
    let mut archived = PackageSnapshot::from_client(number, snapshot);
    if snapshot.status.is_running() {
        if should_complete(snapshot, on) {
            archived.status = ClientStatus::Completed;
        } else {
            archived.status = ClientStatus::Stopped;
            archived.stopped_on = Some(on);
        }
    }
    Ok((archived, fresh))
}

/// Flips a running package to completed when its days are used up.
pub fn refresh(snapshot: &ClientSnapshot, now: CalendarDate) -> Transition {
    let mut next = snapshot.clone();
    let completed = should_complete(snapshot, now);
    if completed {
        next.status = ClientStatus::Completed;
    }
    Transition { snapshot: next, completed }
}

fn close_open_pause(history: &mut [PauseInterval], on: CalendarDate) -> Result<(), LifecycleError> {
    let open = history.open_interval().ok_or(LifecycleError::NoOpenPause)?;
    if on < open.start {
        return Err(LifecycleError::ResumeBeforePause { paused: open.start, resumed: on });
    }
    if let Some(interval) = history.iter_mut().rev().find(|interval| interval.is_open()) {
        interval.end = Some(on);
    }
    Ok(())
}
