use super::{explain_rejection, parse_date_input};
use crate::{
    db::clients::{Clients, NewClient},
    libs::{config::Config, date::CalendarDate, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Client name
    name: String,

    #[arg(long, short, help = "Contact phone number")]
    phone: Option<String>,

    #[arg(long, short, default_value = "today", help = "First day of the package (DD/MM/YYYY or 'today')")]
    start: String,

    /// Package length in days
    ///
    /// Defaults to `default_package_days` from the configuration, or 30.
    #[arg(long, short)]
    days: Option<i64>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let today = CalendarDate::today();
    let start = parse_date_input(&args.start, today)?;
    let days = match args.days {
        Some(days) => days,
        None => Config::read()?.packages.unwrap_or_default().default_package_days,
    };

    let client = NewClient::new(&args.name, args.phone.as_deref(), start, days);
    let id = Clients::new()?.insert(&client).map_err(explain_rejection)?;

    msg_success!(Message::ClientCreated(args.name, id));
    Ok(())
}
