//! Daily activity log: one note per client and day.

use crate::db::db::Db;
use crate::libs::date::{format_date, parse_date, CalendarDate};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::params;
use serde::Serialize;

const UPSERT_ACTIVITY: &str = "INSERT INTO activities (client_id, date, note, completed) VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(client_id, date) DO UPDATE SET note = excluded.note, completed = excluded.completed";
const SELECT_ACTIVITY_ID: &str = "SELECT id FROM activities WHERE client_id = ?1 AND date = ?2";
const SELECT_ACTIVITIES: &str = "SELECT id, client_id, date, note, completed FROM activities WHERE client_id = ?1";

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub id: i64,
    pub client_id: i64,
    pub date: String,
    pub note: String,
    pub completed: bool,
}

pub struct Activities {
    db: Db,
}

impl Activities {
    pub fn new() -> Result<Self> {
        Ok(Self { db: Db::new()? })
    }

    pub fn with_db(db: Db) -> Self {
        Self { db }
    }

    /// Records the activity for `date`, replacing an earlier entry for the same day.
    pub fn log(&mut self, client_id: i64, date: CalendarDate, note: &str, completed: bool) -> Result<i64> {
        let date_str = format_date(date);
        self.db.conn.execute(UPSERT_ACTIVITY, params![client_id, date_str, note, completed])?;
        let id = self.db.conn.query_row(SELECT_ACTIVITY_ID, params![client_id, date_str], |row| row.get(0))?;
        Ok(id)
    }

    /// All activities of a client in calendar order.
    ///
    /// Rows with a malformed date cannot be placed on a calendar and are left out.
    pub fn fetch_for_client(&self, client_id: i64) -> Result<Vec<Activity>> {
        let mut stmt = self.db.conn.prepare(SELECT_ACTIVITIES)?;
        let rows = stmt
            .query_map(params![client_id], |row| {
                Ok(Activity {
                    id: row.get(0)?,
                    client_id: row.get(1)?,
                    date: row.get(2)?,
                    note: row.get(3)?,
                    completed: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut dated: Vec<(CalendarDate, Activity)> =
            rows.into_iter().filter_map(|activity| parse_date(&activity.date).map(|date| (date, activity))).collect();
        dated.sort_by_key(|(date, activity)| (*date, activity.id));
        Ok(dated.into_iter().map(|(_, activity)| activity).collect())
    }

    /// Activities with `from <= date <= to`.
    pub fn fetch_range(&self, client_id: i64, from: CalendarDate, to: CalendarDate) -> Result<Vec<Activity>> {
        Ok(self
            .fetch_for_client(client_id)?
            .into_iter()
            .filter(|activity| parse_date(&activity.date).is_some_and(|date| from <= date && date <= to))
            .collect())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.db.conn.execute("DELETE FROM activities WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::ActivityNotFound(id)));
        }
        Ok(())
    }
}
