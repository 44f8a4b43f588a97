//! Activity log commands.
//!
//! A client has at most one activity per day; logging a second one for the
//! same day replaces the first.

use super::parse_date_input;
use crate::{
    db::{activities::Activities, clients::Clients},
    libs::{date::CalendarDate, messages::Message, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ActivityArgs {
    #[command(subcommand)]
    command: ActivityCommand,
}

#[derive(Debug, Subcommand)]
enum ActivityCommand {
    /// Log what a client did on a day
    Log {
        /// Client ID
        id: i64,
        /// Free-form note, e.g. the workout done
        note: String,
        #[arg(long, short, default_value = "today", help = "Day of the activity (DD/MM/YYYY or 'today')")]
        date: String,
        #[arg(long, help = "Record the session as missed")]
        missed: bool,
    },
    /// List the activities of a client
    List {
        /// Client ID
        id: i64,
    },
    /// Delete an activity by its ID
    Delete {
        /// Activity ID
        id: i64,
    },
}

pub fn cmd(args: ActivityArgs) -> Result<()> {
    match args.command {
        ActivityCommand::Log { id, note, date, missed } => {
            let on = parse_date_input(&date, CalendarDate::today())?;
            let client = Clients::new()?.get(id)?;
            Activities::new()?.log(client.id, on, &note, !missed)?;
            msg_success!(Message::ActivityLogged(client.name, on.to_string()));
        }
        ActivityCommand::List { id } => {
            let client = Clients::new()?.get(id)?;
            let activities = Activities::new()?.fetch_for_client(client.id)?;
            if activities.is_empty() {
                msg_info!(Message::NoActivitiesFound(client.name));
                return Ok(());
            }
            msg_print!(Message::ActivitiesHeader(client.name), true);
            View::activities(&activities)?;
        }
        ActivityCommand::Delete { id } => {
            Activities::new()?.delete(id)?;
            msg_success!(Message::ActivityDeleted(id));
        }
    }

    Ok(())
}
