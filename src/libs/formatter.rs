//! Formatting helpers that turn analyses into display-ready rows.
//!
//! ## Examples
//!
//! ```rust
//! use fitdays::libs::formatter::{format_days, format_progress};
//!
//! assert_eq!(format_progress(50, 10), "[#####-----] 50%");
//! assert_eq!(format_days(1), "1 day");
//! assert_eq!(format_days(12), "12 days");
//! ```

use crate::libs::analysis::DayAnalysis;
use crate::libs::client::Client;
use serde::Serialize;

/// A client row with every value pre-formatted for tables.
#[derive(Debug, Clone, Serialize)]
pub struct FormattedClient {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub day: String,
    pub days_remaining: String,
    pub paused_days: String,
    pub progress: String,
    pub expected_end: String,
    pub summary: String,
}

impl FormattedClient {
    /// Formats `client`; `analysis` is `None` when the record could not be analysed.
    pub fn new(client: &Client, analysis: Option<&DayAnalysis>) -> Self {
        match analysis {
            Some(analysis) => Self {
                id: client.id,
                name: client.name.clone(),
                status: analysis.status.to_string(),
                day: format!("{}/{}", analysis.current_day, analysis.package_days),
                days_remaining: analysis.days_remaining.to_string(),
                paused_days: analysis.total_paused_days.to_string(),
                progress: format_progress(analysis.progress_percent, 10),
                expected_end: analysis.expected_end_date.to_string(),
                summary: analysis.status_text(),
            },
            None => Self {
                id: client.id,
                name: client.name.clone(),
                status: client.status.to_string(),
                day: "-".to_string(),
                days_remaining: "-".to_string(),
                paused_days: "-".to_string(),
                progress: "-".to_string(),
                expected_end: "-".to_string(),
                summary: "malformed start date".to_string(),
            },
        }
    }
}

/// Text progress bar of `width` cells followed by the percentage.
///
/// Percentages outside `[0, 100]` are clamped.
pub fn format_progress(percent: i64, width: usize) -> String {
    let percent = percent.clamp(0, 100);
    let filled = (percent as usize * width + 50) / 100;
    format!("[{}{}] {}%", "#".repeat(filled), "-".repeat(width - filled), percent)
}

pub fn format_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}
