use super::{explain_rejection, parse_date_input};
use crate::{
    db::clients::Clients,
    libs::{date::CalendarDate, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StopArgs {
    /// Client ID
    id: i64,

    /// Day the package ends early
    ///
    /// A paused client has the open pause closed on this date.
    #[arg(long, short, default_value = "today", help = "Stop date (DD/MM/YYYY or 'today')")]
    date: String,
}

pub fn cmd(args: StopArgs) -> Result<()> {
    let on = parse_date_input(&args.date, CalendarDate::today())?;
    let client = Clients::new()?.stop(args.id, on).map_err(explain_rejection)?;

    msg_success!(Message::ClientStopped(client.name, on.to_string()));
    Ok(())
}
