use super::{explain_rejection, parse_date_input};
use crate::{
    db::clients::Clients,
    libs::{date::CalendarDate, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PauseArgs {
    /// Client ID
    id: i64,

    /// First paused day
    ///
    /// Days from this date up to the resume date do not count towards the
    /// package and push its end date back.
    #[arg(long, short, default_value = "today", help = "First paused day (DD/MM/YYYY or 'today')")]
    date: String,
}

pub fn cmd(args: PauseArgs) -> Result<()> {
    let on = parse_date_input(&args.date, CalendarDate::today())?;
    let client = Clients::new()?.pause(args.id, on).map_err(explain_rejection)?;

    msg_success!(Message::ClientPaused(client.name, on.to_string()));
    Ok(())
}
