//! Month calendar of package days.
//!
//! Each cell shows which day of the package a date was, resolved against the
//! package it belongs to. Past packages keep their own start date and their
//! own pauses, so an old calendar never shifts when the client renews.

use crate::{
    db::{activities::Activities, clients::Clients, packages::Packages},
    libs::{
        date::{add_days, days_in_month, parse_date, parse_month, CalendarDate},
        messages::Message,
        package::PackageSnapshot,
        view::View,
    },
    msg_bail_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;
use std::collections::HashSet;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    /// Client ID
    id: i64,

    /// Month to show as `MM/YYYY`
    ///
    /// Defaults to the current month for the current package and to the
    /// starting month for an archived one.
    #[arg(long, short)]
    month: Option<String>,

    #[arg(long, short, help = "Package number; defaults to the current package")]
    package: Option<i64>,
}

pub fn cmd(args: CalendarArgs) -> Result<()> {
    let today = CalendarDate::today();
    let client = Clients::new()?.get(args.id)?;

    let package = match args.package {
        Some(number) if number != client.package_number => {
            let Some(archived) = Packages::new()?.fetch(client.id, number)? else {
                msg_bail_anyhow!(Message::PackageNotFound(client.id, number));
            };
            let Some(snapshot) = archived.snapshot() else {
                msg_bail_anyhow!(Message::ClientRecordMalformed(client.id));
            };
            snapshot
        }
        _ => {
            let Some(snapshot) = client.snapshot() else {
                msg_bail_anyhow!(Message::ClientRecordMalformed(client.id));
            };
            PackageSnapshot::from_client(client.package_number, &snapshot)
        }
    };

    let (year, month) = match &args.month {
        Some(text) => match parse_month(text) {
            Some(month) => month,
            None => msg_bail_anyhow!(Message::InvalidMonth(text.clone())),
        },
        None if args.package.is_some_and(|number| number != client.package_number) => {
            (package.start_date.year(), package.start_date.month())
        }
        None => (today.year(), today.month()),
    };

    let marks = package.month_marks(year, month);
    let logged = logged_days(client.id, year, month)?;

    msg_print!(Message::CalendarHeader(client.name.clone(), package.number, format!("{:02}/{}", month, year)), true);
    View::calendar(&marks, &logged)?;
    msg_print!(Message::CalendarLegend);
    Ok(())
}

fn logged_days(client_id: i64, year: i32, month: u32) -> Result<HashSet<CalendarDate>> {
    let (Some(first), Some(len)) = (CalendarDate::from_dmy(1, month, year), days_in_month(year, month)) else {
        return Ok(HashSet::new());
    };
    let last = add_days(first, i64::from(len) - 1);

    Ok(Activities::new()?
        .fetch_range(client_id, first, last)?
        .iter()
        .filter_map(|activity| parse_date(&activity.date))
        .collect())
}
