use super::{explain_rejection, parse_date_input};
use crate::{
    db::clients::Clients,
    libs::{date::CalendarDate, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ResumeArgs {
    /// Client ID
    id: i64,

    #[arg(long, short, default_value = "today", help = "Day training resumes (DD/MM/YYYY or 'today')")]
    date: String,
}

/// Closes the open pause and reports when the package turns out to be finished.
pub fn cmd(args: ResumeArgs) -> Result<()> {
    let today = CalendarDate::today();
    let on = parse_date_input(&args.date, today)?;
    let update = Clients::new()?.resume(args.id, on, today).map_err(explain_rejection)?;

    msg_success!(Message::ClientResumed(update.client.name.clone(), on.to_string()));
    if update.completed {
        msg_info!(Message::ClientCompleted(update.client.name));
    }
    Ok(())
}
