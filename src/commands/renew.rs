//! Package renewal command.
//!
//! The current package is archived with its pauses, whatever its status, and
//! the client starts over on day 1 of a new package.

use super::{explain_rejection, parse_date_input};
use crate::{
    db::clients::Clients,
    libs::{config::Config, date::CalendarDate, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RenewArgs {
    /// Client ID
    id: i64,

    #[arg(long, short, default_value = "today", help = "First day of the new package (DD/MM/YYYY or 'today')")]
    start: String,

    /// Length of the new package in days
    ///
    /// Defaults to `default_package_days` from the configuration, or 30.
    #[arg(long, short)]
    days: Option<i64>,
}

pub fn cmd(args: RenewArgs) -> Result<()> {
    let today = CalendarDate::today();
    let start = parse_date_input(&args.start, today)?;
    let days = match args.days {
        Some(days) => days,
        None => Config::read()?.packages.unwrap_or_default().default_package_days,
    };

    let client = Clients::new()?.renew(args.id, start, days, today).map_err(explain_rejection)?;

    msg_success!(Message::ClientRenewed(client.name, client.package_number));
    Ok(())
}
