//! Client overview command.
//!
//! Lists every client with the current day of their package, the days left
//! and the expected end date, all derived as of today.

use crate::{
    db::clients::Clients,
    libs::{
        analysis::analyze,
        client::ClientStatus,
        config::Config,
        date::CalendarDate,
        formatter::FormattedClient,
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show clients with this status
    ///
    /// A running package whose days are used up counts as completed here,
    /// whether or not that status has been stored yet.
    #[arg(long, short, value_enum)]
    status: Option<ClientStatus>,
}

/// Executes the list command.
///
/// With `auto_complete` enabled in the configuration (the default), running
/// packages whose days are used up are stored as completed first.
pub fn cmd(args: ListArgs) -> Result<()> {
    let today = CalendarDate::today();
    let mut clients = Clients::new()?;

    if Config::read()?.packages.unwrap_or_default().auto_complete {
        let completed = clients.refresh_all(today)?;
        if !completed.is_empty() {
            msg_info!(Message::ClientsCompletedCount(completed.len()));
        }
    }

    let rows: Vec<FormattedClient> = clients
        .fetch_all()?
        .iter()
        .filter_map(|client| {
            let analysis = client.snapshot().map(|snapshot| analyze(&snapshot, today));
            let status = match &analysis {
                Some(analysis) if analysis.is_completed && analysis.status.is_running() => ClientStatus::Completed,
                Some(analysis) => analysis.status,
                None => client.status,
            };
            match args.status {
                Some(wanted) if wanted != status => None,
                _ => Some(FormattedClient::new(client, analysis.as_ref())),
            }
        })
        .collect();

    if rows.is_empty() {
        msg_info!(Message::NoClientsFound);
        return Ok(());
    }

    msg_print!(Message::ClientsHeader, true);
    View::clients(&rows)
}
