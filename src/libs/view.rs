use super::analysis::DayAnalysis;
use super::client::Client;
use super::date::{format_date, CalendarDate};
use super::formatter::{format_days, format_progress, FormattedClient};
use super::package::DayMark;
use super::pause::FormattedPause;
use crate::db::activities::Activity;
use crate::db::packages::ArchivedPackage;
use anyhow::Result;
use chrono::Datelike;
use prettytable::{row, Cell, Row, Table};
use std::collections::HashSet;

pub struct View {}

impl View {
    pub fn clients(clients: &[FormattedClient]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "STATUS", "DAY", "LEFT", "PAUSED", "PROGRESS", "EXPECTED END"]);
        for client in clients {
            table.add_row(row![
                client.id,
                client.name,
                client.status,
                client.day,
                client.days_remaining,
                client.paused_days,
                client.progress,
                client.expected_end
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn analysis(client: &Client, analysis: &DayAnalysis) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Status", analysis.status_text()]);
        table.add_row(row!["Phone", client.phone.as_deref().unwrap_or("-")]);
        table.add_row(row!["Package", format!("#{} ({})", client.package_number, format_days(analysis.package_days))]);
        table.add_row(row!["Started", client.start_date]);
        if let Some(stopped_on) = &client.stopped_on {
            table.add_row(row!["Stopped", stopped_on]);
        }
        table.add_row(row!["Current day", analysis.current_day]);
        table.add_row(row!["Days elapsed", analysis.days_elapsed]);
        table.add_row(row!["Days used", analysis.effective_days_used]);
        table.add_row(row!["Days left", analysis.days_remaining]);
        table.add_row(row!["Days paused", analysis.total_paused_days]);
        table.add_row(row!["Progress", format_progress(analysis.progress_percent, 20)]);
        table.add_row(row!["Original end", format_date(analysis.original_end_date)]);
        table.add_row(row!["Expected end", format_date(analysis.expected_end_date)]);
        table.printstd();

        Ok(())
    }

    pub fn pauses(pauses: &[FormattedPause]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "PAUSED", "RESUMED", "DAYS"]);
        for pause in pauses {
            table.add_row(row![pause.id, pause.start, pause.end, pause.days]);
        }
        table.printstd();

        Ok(())
    }

    /// Archived packages with the analysis each had on the day it was archived.
    pub fn packages(packages: &[(ArchivedPackage, Option<DayAnalysis>)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "START", "END", "DAYS", "USED", "PAUSED", "FINAL STATUS", "ARCHIVED"]);
        for (package, analysis) in packages {
            let (used, paused) = match analysis {
                Some(analysis) => (analysis.effective_days_used.to_string(), analysis.total_paused_days.to_string()),
                None => ("-".to_string(), "-".to_string()),
            };
            table.add_row(row![
                package.number,
                package.start_date,
                package.end_date,
                package.package_days,
                used,
                paused,
                package.final_status,
                package.archived_on
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn activities(activities: &[Activity]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "DONE", "NOTE"]);
        for activity in activities {
            let done = if activity.completed { "yes" } else { "no" };
            table.add_row(row![activity.id, activity.date, done, activity.note]);
        }
        table.printstd();

        Ok(())
    }

    /// Month grid, Monday first. Each cell shows the day of the month and its mark.
    pub fn migrations(history: &[(u32, String, String)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["VERSION", "NAME", "APPLIED"]);
        for (version, name, applied_at) in history {
            table.add_row(row![format!("v{}", version), name, applied_at]);
        }
        table.printstd();

        Ok(())
    }

    pub fn calendar(marks: &[(CalendarDate, DayMark)], logged: &HashSet<CalendarDate>) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);

        let Some((first, _)) = marks.first() else {
            return Ok(());
        };
        let mut cells: Vec<Cell> = (0..first.naive().weekday().num_days_from_monday()).map(|_| Cell::new("")).collect();

        for (date, mark) in marks {
            let marker = match mark {
                DayMark::Day(day) => format!("{:>2}", day),
                DayMark::Paused => "--".to_string(),
                DayMark::BeforeStart | DayMark::AfterPackage => "..".to_string(),
            };
            let activity = if logged.contains(date) { "*" } else { "" };
            cells.push(Cell::new(&format!("{:>2} {}{}", date.day(), marker, activity)));

            if cells.len() == 7 {
                table.add_row(Row::new(std::mem::take(&mut cells)));
            }
        }
        if !cells.is_empty() {
            cells.resize_with(7, || Cell::new(""));
            table.add_row(Row::new(cells));
        }
        table.printstd();

        Ok(())
    }
}
