//! Export of day analyses to CSV and JSON.
//!
//! One row per client with every figure of its current [`DayAnalysis`].
//! Dates keep the `DD/MM/YYYY` form used by stored records.

use crate::libs::analysis::{analyze, DayAnalysis};
use crate::libs::client::Client;
use crate::libs::date::{format_date, CalendarDate};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportClient {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub status: String,
    pub package_number: i64,
    pub start_date: String,
    pub package_days: i64,
    pub current_day: i64,
    pub days_elapsed: i64,
    pub effective_days_used: i64,
    pub days_remaining: i64,
    pub total_paused_days: i64,
    pub progress_percent: i64,
    pub is_completed: bool,
    pub original_end_date: String,
    pub expected_end_date: String,
}

impl ExportClient {
    pub fn new(client: &Client, analysis: &DayAnalysis) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
            phone: client.phone.clone().unwrap_or_default(),
            status: analysis.status.to_string(),
            package_number: client.package_number,
            start_date: client.start_date.clone(),
            package_days: analysis.package_days,
            current_day: analysis.current_day,
            days_elapsed: analysis.days_elapsed,
            effective_days_used: analysis.effective_days_used,
            days_remaining: analysis.days_remaining,
            total_paused_days: analysis.total_paused_days,
            progress_percent: analysis.progress_percent,
            is_completed: analysis.is_completed,
            original_end_date: format_date(analysis.original_end_date),
            expected_end_date: format_date(analysis.expected_end_date),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, now: CalendarDate) -> Self {
        let default_name = format!(
            "fitdays_export_{:04}{:02}{:02}",
            now.year(),
            now.month(),
            now.day()
        );
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Analyses every client as of `now` and writes the rows.
    ///
    /// Clients with a malformed start date are skipped. Returns the number of rows written.
    pub fn export_clients(&self, clients: &[Client], now: CalendarDate) -> Result<usize> {
        let rows: Vec<ExportClient> = clients
            .iter()
            .filter_map(|client| match client.snapshot() {
                Some(snapshot) => Some(ExportClient::new(client, &analyze(&snapshot, now))),
                None => {
                    tracing::warn!(client_id = client.id, "not exporting client with a malformed start date");
                    None
                }
            })
            .collect();

        match self.format {
            ExportFormat::Csv => self.write_csv(&rows)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }

        Ok(rows.len())
    }

    fn write_csv(&self, rows: &[ExportClient]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
