//! Archived packages and their frozen pause histories.
//!
//! A package row is written once, on renewal, and never changes afterwards.
//! Its pauses are the rows that were live at renewal time, re-pointed at the
//! package via `package_id`.

use crate::db::db::Db;
use crate::libs::client::ClientStatus;
use crate::libs::date::parse_date;
use crate::libs::package::PackageSnapshot;
use crate::libs::pause::{PauseHistory, PauseRecord};
use anyhow::Result;
use rusqlite::{params, Connection};

const SELECT_PACKAGES: &str = "SELECT id, client_id, number, start_date, package_days, end_date, final_status, archived_on, stopped_on
    FROM packages WHERE client_id = ?1 ORDER BY number";
const SELECT_PACKAGE_PAUSES: &str = "SELECT id, paused_at, resumed_at FROM pauses WHERE package_id = ?1 ORDER BY id";

#[derive(Debug, Clone)]
pub struct ArchivedPackage {
    pub id: i64,
    pub client_id: i64,
    pub number: i64,
    pub start_date: String,
    pub package_days: i64,
    pub end_date: String,
    pub final_status: ClientStatus,
    pub archived_on: String,
    pub stopped_on: Option<String>,
    pub pauses: Vec<PauseRecord>,
}

impl ArchivedPackage {
    /// The calculator's view of this package; `None` if its start date is malformed.
    pub fn snapshot(&self) -> Option<PackageSnapshot> {
        let start_date = parse_date(&self.start_date)?;
        let end_date = parse_date(&self.end_date)
            .unwrap_or_else(|| crate::libs::date::add_days(start_date, self.package_days - 1));
        Some(PackageSnapshot {
            number: self.number,
            start_date,
            package_days: self.package_days,
            end_date,
            status: self.final_status,
            pause_history: self.pauses.intervals(),
            stopped_on: self.stopped_on.as_deref().and_then(parse_date),
        })
    }
}

pub struct Packages {
    db: Db,
}

impl Packages {
    pub fn new() -> Result<Self> {
        Ok(Self { db: Db::new()? })
    }

    pub fn with_db(db: Db) -> Self {
        Self { db }
    }

    /// Every archived package of a client, oldest first.
    pub fn fetch_for_client(&self, client_id: i64) -> Result<Vec<ArchivedPackage>> {
        let mut stmt = self.db.conn.prepare(SELECT_PACKAGES)?;
        let rows = stmt
            .query_map(params![client_id], |row| {
                Ok(ArchivedPackage {
                    id: row.get(0)?,
                    client_id: row.get(1)?,
                    number: row.get(2)?,
                    start_date: row.get(3)?,
                    package_days: row.get(4)?,
                    end_date: row.get(5)?,
                    final_status: row.get(6)?,
                    archived_on: row.get(7)?,
                    stopped_on: row.get(8)?,
                    pauses: Vec::new(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut packages = Vec::with_capacity(rows.len());
        for mut package in rows {
            package.pauses = package_pauses(&self.db.conn, package.id)?;
            packages.push(package);
        }
        Ok(packages)
    }

    pub fn fetch(&self, client_id: i64, number: i64) -> Result<Option<ArchivedPackage>> {
        Ok(self.fetch_for_client(client_id)?.into_iter().find(|package| package.number == number))
    }
}

fn package_pauses(conn: &Connection, package_id: i64) -> Result<Vec<PauseRecord>> {
    let mut stmt = conn.prepare(SELECT_PACKAGE_PAUSES)?;
    let pauses = stmt
        .query_map(params![package_id], |row| {
            Ok(PauseRecord {
                id: row.get(0)?,
                paused_at: row.get(1)?,
                resumed_at: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(pauses)
}
