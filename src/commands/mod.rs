//! Command-line interface of fitdays.
//!
//! Every subcommand lives in its own module with a clap `Args` struct and a
//! `cmd` function. Command code reads the clock exactly once, through
//! [`CalendarDate::today`], and hands that date down to the library.

pub mod activity;
pub mod add;
pub mod calendar;
pub mod delete;
pub mod export;
pub mod history;
pub mod init;
pub mod list;
pub mod migrations;
pub mod pause;
pub mod renew;
pub mod resume;
pub mod show;
pub mod stop;

use crate::libs::date::{parse_date_arg, CalendarDate};
use crate::libs::lifecycle::LifecycleError;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a client with a new package", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "List clients with their current day")]
    List(list::ListArgs),
    #[command(about = "Show the day analysis of a client", arg_required_else_help = true)]
    Show(show::ShowArgs),
    #[command(about = "Pause a client's package", arg_required_else_help = true)]
    Pause(pause::PauseArgs),
    #[command(about = "Resume a paused package", arg_required_else_help = true)]
    Resume(resume::ResumeArgs),
    #[command(about = "Stop a package before it ends", arg_required_else_help = true)]
    Stop(stop::StopArgs),
    #[command(about = "Archive the current package and start a new one", arg_required_else_help = true)]
    Renew(renew::RenewArgs),
    #[command(about = "Delete a client with all of its data", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show a month calendar of package days", arg_required_else_help = true)]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Show archived packages of a client", arg_required_else_help = true)]
    History(history::HistoryArgs),
    #[command(about = "Log, list or delete client activities", arg_required_else_help = true)]
    Activity(activity::ActivityArgs),
    #[command(about = "Export client analyses to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Show database migration status")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Pause(args) => pause::cmd(args),
            Commands::Resume(args) => resume::cmd(args),
            Commands::Stop(args) => stop::cmd(args),
            Commands::Renew(args) => renew::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Calendar(args) => calendar::cmd(args),
            Commands::History(args) => history::cmd(args),
            Commands::Activity(args) => activity::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Parses a date argument (`DD/MM/YYYY` or `today`) into a user-facing error on failure.
pub(crate) fn parse_date_input(text: &str, today: CalendarDate) -> Result<CalendarDate> {
    parse_date_arg(text, today).map_err(|e| msg_error_anyhow!(Message::InvalidDate(text.to_string(), e.to_string())))
}

/// Rewrites lifecycle rejections into a user-facing message; other errors pass through.
pub(crate) fn explain_rejection(error: anyhow::Error) -> anyhow::Error {
    match error.downcast_ref::<LifecycleError>() {
        Some(LifecycleError::InvalidPackageDays(days)) => msg_error_anyhow!(Message::InvalidPackageDays(*days)),
        Some(rejection) => msg_error_anyhow!(Message::TransitionRejected(rejection.to_string())),
        None => error,
    }
}
