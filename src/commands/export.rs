//! Data export command.
//!
//! Writes the day analysis of every client, as of today, to a CSV or JSON
//! file for spreadsheets or other tools.

use crate::{
    db::clients::Clients,
    libs::{
        date::CalendarDate,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// Defaults to `fitdays_export_YYYYMMDD.<ext>` in the working directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let today = CalendarDate::today();
    let clients = Clients::new()?.fetch_all()?;

    let exporter = Exporter::new(args.format, args.output, today);
    let count = exporter.export_clients(&clients, today)?;
    tracing::info!(count, path = %exporter.output_path().display(), "clients exported");

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
