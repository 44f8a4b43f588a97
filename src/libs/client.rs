//! Client records and the read-only snapshot the calculator works on.

use crate::libs::date::{parse_date, CalendarDate};
use crate::libs::pause::{PauseHistory, PauseInterval, PauseRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of a client's current package.
///
/// Status is owned by the caller: the calculator reports it back but never
/// derives it from dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Paused,
    Completed,
    Stopped,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Paused => "paused",
            ClientStatus::Completed => "completed",
            ClientStatus::Stopped => "stopped",
        }
    }

    /// Active and paused packages are still running and may complete.
    pub fn is_running(&self) -> bool {
        matches!(self, ClientStatus::Active | ClientStatus::Paused)
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown client status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for ClientStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(ClientStatus::Active),
            "paused" => Ok(ClientStatus::Paused),
            "completed" => Ok(ClientStatus::Completed),
            "stopped" => Ok(ClientStatus::Stopped),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Everything the calculator needs to know about a client's current package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSnapshot {
    pub start_date: CalendarDate,
    pub package_days: i64,
    pub end_date: CalendarDate,
    pub status: ClientStatus,
    pub pause_history: Vec<PauseInterval>,
    /// Day the package was stopped; stopped packages are analysed as of this day.
    pub stopped_on: Option<CalendarDate>,
}

/// A client row as stored, dates still in their text form.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub start_date: String,
    pub package_days: i64,
    pub end_date: String,
    pub status: ClientStatus,
    /// Number of the current package; 1 until the first renewal.
    pub package_number: i64,
    pub stopped_on: Option<String>,
    pub pauses: Vec<PauseRecord>,
}

impl Client {
    /// The calculator's view of this client.
    ///
    /// `None` when the stored start date is malformed. A malformed end date
    /// falls back to the nominal end of the package. Malformed pause rows
    /// and a malformed stop date are left out.
    pub fn snapshot(&self) -> Option<ClientSnapshot> {
        let start_date = parse_date(&self.start_date)?;
        let end_date = parse_date(&self.end_date)
            .unwrap_or_else(|| crate::libs::date::add_days(start_date, self.package_days - 1));
        Some(ClientSnapshot {
            start_date,
            package_days: self.package_days,
            end_date,
            status: self.status,
            pause_history: self.pauses.intervals(),
            stopped_on: self.stopped_on.as_deref().and_then(parse_date),
        })
    }
}
