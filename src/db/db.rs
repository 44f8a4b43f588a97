use crate::db::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "fitdays.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database, falling back to the data directory,
    /// and brings its schema up to date.
    pub fn new() -> Result<Db> {
        Self::open(Self::default_path()?)
    }

    /// Opens a database file and applies pending migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let mut conn = Self::open_without_migrations(path)?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Opens a database file as-is, only enabling foreign keys.
    pub fn open_without_migrations(path: impl AsRef<Path>) -> Result<Connection> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Where `Db::new` looks for the database file.
    pub fn default_path() -> Result<PathBuf> {
        match Config::read()?.database {
            Some(database) => Ok(database.path),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}
