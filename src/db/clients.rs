//! Client storage and lifecycle persistence.
//!
//! `Clients` is the record service around the day calculator: it loads a
//! client, lets [`crate::libs::lifecycle`] decide the next state, and writes
//! the result back. Every mutation is a read-modify-write inside a single
//! SQLite transaction, so two updates of the same client cannot interleave.
//!
//! ## Usage
//!
//! ```rust
//! use fitdays::db::{clients::{Clients, NewClient}, db::Db};
//! use fitdays::libs::date::parse_date;
//!
//! # fn main() -> anyhow::Result<()> {
//! let dir = tempfile::tempdir()?;
//! let mut clients = Clients::with_db(Db::open(dir.path().join("fitdays.db"))?);
//! let start = parse_date("01/03/2024").unwrap();
//! let id = clients.insert(&NewClient::new("Anna", None, start, 30))?;
//! clients.pause(id, parse_date("05/03/2024").unwrap())?;
//! # Ok(())
//! # }
//! ```

use crate::db::db::Db;
use crate::libs::client::{Client, ClientSnapshot, ClientStatus};
use crate::libs::date::{format_date, CalendarDate};
use crate::libs::lifecycle;
use crate::libs::messages::Message;
use crate::libs::pause::PauseRecord;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension};

const SELECT_CLIENT: &str =
    "SELECT id, name, phone, start_date, package_days, end_date, status, package_number, stopped_on FROM clients WHERE id = ?1";
const SELECT_ALL_CLIENTS: &str =
    "SELECT id, name, phone, start_date, package_days, end_date, status, package_number, stopped_on FROM clients ORDER BY name COLLATE NOCASE, id";
const SELECT_LIVE_PAUSES: &str =
    "SELECT id, paused_at, resumed_at FROM pauses WHERE client_id = ?1 AND package_id IS NULL ORDER BY id";
const UPDATE_CLIENT: &str =
    "UPDATE clients SET start_date = ?2, package_days = ?3, end_date = ?4, status = ?5, package_number = ?6, stopped_on = ?7 WHERE id = ?1";
const INSERT_PAUSE: &str = "INSERT INTO pauses (client_id, paused_at) VALUES (?1, ?2)";
const CLOSE_OPEN_PAUSE: &str = "UPDATE pauses SET resumed_at = ?2
    WHERE id = (SELECT MAX(id) FROM pauses WHERE client_id = ?1 AND package_id IS NULL AND resumed_at IS NULL)";

impl ToSql for ClientStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ClientStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// Data needed to enrol a new client.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub phone: Option<String>,
    pub start_date: CalendarDate,
    pub package_days: i64,
}

impl NewClient {
    pub fn new(name: &str, phone: Option<&str>, start_date: CalendarDate, package_days: i64) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.map(str::to_string),
            start_date,
            package_days,
        }
    }
}

/// A client after a transition that may have completed the package.
#[derive(Debug, Clone)]
pub struct ClientUpdate {
    pub client: Client,
    pub completed: bool,
}

pub struct Clients {
    db: Db,
}

impl Clients {
    pub fn new() -> Result<Self> {
        Ok(Self { db: Db::new()? })
    }

    pub fn with_db(db: Db) -> Self {
        Self { db }
    }

    pub fn insert(&mut self, client: &NewClient) -> Result<i64> {
        let snapshot = lifecycle::new_package(client.start_date, client.package_days)?;
        self.db.conn.execute(
            "INSERT INTO clients (name, phone, start_date, package_days, end_date, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                client.name,
                client.phone,
                format_date(snapshot.start_date),
                snapshot.package_days,
                format_date(snapshot.end_date),
                snapshot.status,
            ],
        )?;
        let id = self.db.conn.last_insert_rowid();
        tracing::info!(client_id = id, name = %client.name, "client created");
        Ok(id)
    }

    pub fn fetch(&self, id: i64) -> Result<Option<Client>> {
        load(&self.db.conn, id)
    }

    /// Fetches a client or fails with a user-facing "not found" error.
    pub fn get(&self, id: i64) -> Result<Client> {
        self.fetch(id)?.ok_or_else(|| msg_error_anyhow!(Message::ClientNotFound(id)))
    }

    pub fn fetch_all(&self) -> Result<Vec<Client>> {
        let mut stmt = self.db.conn.prepare(SELECT_ALL_CLIENTS)?;
        let rows = stmt.query_map([], client_from_row)?.collect::<Result<Vec<_>, _>>()?;

        let mut clients = Vec::with_capacity(rows.len());
        for mut client in rows {
            client.pauses = live_pauses(&self.db.conn, client.id)?;
            clients.push(client);
        }
        Ok(clients)
    }

    /// Deletes a client together with its packages, pauses and activities.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.db.conn.execute("DELETE FROM clients WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::ClientNotFound(id)));
        }
        tracing::info!(client_id = id, "client deleted");
        Ok(())
    }

    pub fn pause(&mut self, id: i64, on: CalendarDate) -> Result<Client> {
        let tx = self.db.conn.transaction()?;
        let (client, snapshot) = load_snapshot(&tx, id)?;
        let next = lifecycle::pause(&snapshot, on)?;

        tx.execute(INSERT_PAUSE, params![id, format_date(on)])?;
        store_snapshot(&tx, id, &next, client.package_number)?;
        let updated = load(&tx, id)?.ok_or_else(|| msg_error_anyhow!(Message::ClientNotFound(id)))?;
        tx.commit()?;

        tracing::info!(client_id = id, on = %on, "client paused");
        Ok(updated)
    }

    /// Resumes a paused client and completes the package if its days ran out.
    pub fn resume(&mut self, id: i64, on: CalendarDate, now: CalendarDate) -> Result<ClientUpdate> {
        let tx = self.db.conn.transaction()?;
        let (client, snapshot) = load_snapshot(&tx, id)?;
        let transition = lifecycle::resume(&snapshot, on, now)?;

        tx.execute(CLOSE_OPEN_PAUSE, params![id, format_date(on)])?;
        store_snapshot(&tx, id, &transition.snapshot, client.package_number)?;
        let updated = load(&tx, id)?.ok_or_else(|| msg_error_anyhow!(Message::ClientNotFound(id)))?;
        tx.commit()?;

        tracing::info!(client_id = id, on = %on, completed = transition.completed, "client resumed");
        Ok(ClientUpdate { client: updated, completed: transition.completed })
    }

    pub fn stop(&mut self, id: i64, on: CalendarDate) -> Result<Client> {
        let tx = self.db.conn.transaction()?;
        let (client, snapshot) = load_snapshot(&tx, id)?;
        let next = lifecycle::stop(&snapshot, on)?;

        if snapshot.status == ClientStatus::Paused {
            tx.execute(CLOSE_OPEN_PAUSE, params![id, format_date(on)])?;
        }
        store_snapshot(&tx, id, &next, client.package_number)?;
        let updated = load(&tx, id)?.ok_or_else(|| msg_error_anyhow!(Message::ClientNotFound(id)))?;
        tx.commit()?;

        tracing::info!(client_id = id, on = %on, "client stopped");
        Ok(updated)
    }

    /// Archives the current package with its pauses and starts a new one.
    ///
    /// A running package is archived as completed or stopped on `archived_on`.
    pub fn renew(&mut self, id: i64, start: CalendarDate, package_days: i64, archived_on: CalendarDate) -> Result<Client> {
        let tx = self.db.conn.transaction()?;
        let (client, snapshot) = load_snapshot(&tx, id)?;
        let (archived, fresh) = lifecycle::renew(&snapshot, client.package_number, start, package_days, archived_on)?;

        tx.execute(
            "INSERT INTO packages (client_id, number, start_date, package_days, end_date, final_status, archived_on, stopped_on)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                id,
                archived.number,
                client.start_date,
                archived.package_days,
                client.end_date,
                archived.status,
                format_date(archived_on),
                archived.stopped_on.map(format_date),
            ],
        )?;
        let package_id = tx.last_insert_rowid();
        tx.execute(
            "UPDATE pauses SET package_id = ?2 WHERE client_id = ?1 AND package_id IS NULL",
            params![id, package_id],
        )?;
        store_snapshot(&tx, id, &fresh, client.package_number + 1)?;
        let updated = load(&tx, id)?.ok_or_else(|| msg_error_anyhow!(Message::ClientNotFound(id)))?;
        tx.commit()?;

        tracing::info!(client_id = id, package = archived.number, "package archived and renewed");
        Ok(updated)
    }

    /// Persists the completed status for every running package whose days ran out.
    ///
    /// Returns the clients that were flipped.
    pub fn refresh_all(&mut self, now: CalendarDate) -> Result<Vec<Client>> {
        let tx = self.db.conn.transaction()?;
        let ids: Vec<i64> = {
            let mut stmt = tx.prepare("SELECT id FROM clients WHERE status IN ('active', 'paused') ORDER BY id")?;
            let ids: Vec<i64> = stmt.query_map([], |row| row.get(0))?.collect::<Result<Vec<_>, _>>()?;
            ids
        };

        let mut completed = Vec::new();
        for id in ids {
            let Some(client) = load(&tx, id)? else { continue };
            let Some(snapshot) = client.snapshot() else {
                tracing::warn!(client_id = id, "skipping client with a malformed start date");
                continue;
            };
            let transition = lifecycle::refresh(&snapshot, now);
            if transition.completed {
                tx.execute("UPDATE clients SET status = ?2 WHERE id = ?1", params![id, transition.snapshot.status])?;
                completed.push(Client { status: transition.snapshot.status, ..client });
            }
        }
        tx.commit()?;

        if !completed.is_empty() {
            tracing::info!(count = completed.len(), "packages marked as completed");
        }
        Ok(completed)
    }
}

fn client_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        start_date: row.get(3)?,
        package_days: row.get(4)?,
        end_date: row.get(5)?,
        status: row.get(6)?,
        package_number: row.get(7)?,
        stopped_on: row.get(8)?,
        pauses: Vec::new(),
    })
}

fn live_pauses(conn: &Connection, client_id: i64) -> Result<Vec<PauseRecord>> {
    let mut stmt = conn.prepare(SELECT_LIVE_PAUSES)?;
    let pauses = stmt
        .query_map(params![client_id], |row| {
            Ok(PauseRecord {
                id: row.get(0)?,
                paused_at: row.get(1)?,
                resumed_at: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(pauses)
}

fn load(conn: &Connection, id: i64) -> Result<Option<Client>> {
    let client = conn.query_row(SELECT_CLIENT, params![id], client_from_row).optional()?;
    match client {
        Some(mut client) => {
            client.pauses = live_pauses(conn, id)?;
            Ok(Some(client))
        }
        None => Ok(None),
    }
}

fn load_snapshot(conn: &Connection, id: i64) -> Result<(Client, ClientSnapshot)> {
    let client = load(conn, id)?.ok_or_else(|| msg_error_anyhow!(Message::ClientNotFound(id)))?;
    let snapshot = client.snapshot().ok_or_else(|| msg_error_anyhow!(Message::ClientRecordMalformed(id)))?;
    Ok((client, snapshot))
}

fn store_snapshot(conn: &Connection, id: i64, snapshot: &ClientSnapshot, package_number: i64) -> Result<()> {
    conn.execute(
        UPDATE_CLIENT,
        params![
            id,
            format_date(snapshot.start_date),
            snapshot.package_days,
            format_date(snapshot.end_date),
            snapshot.status,
            package_number,
            snapshot.stopped_on.map(format_date),
        ],
    )?;
    Ok(())
}
