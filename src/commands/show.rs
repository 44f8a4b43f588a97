use crate::{
    db::clients::Clients,
    libs::{analysis::analyze, date::CalendarDate, messages::Message, pause::PauseGroup, view::View},
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Client ID
    id: i64,
}

/// Prints the full day analysis of one client and the pauses of the current package.
pub fn cmd(args: ShowArgs) -> Result<()> {
    let today = CalendarDate::today();
    let client = Clients::new()?.get(args.id)?;
    let Some(snapshot) = client.snapshot() else {
        msg_bail_anyhow!(Message::ClientRecordMalformed(client.id));
    };

    msg_print!(Message::ClientHeader(client.name.clone()), true);
    View::analysis(&client, &analyze(&snapshot, today))?;

    msg_print!(Message::PausesHeader, true);
    let pauses = snapshot.pause_history.format(today);
    if pauses.is_empty() {
        msg_info!(Message::NoPausesRecorded);
        return Ok(());
    }
    View::pauses(&pauses)
}
