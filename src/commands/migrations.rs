//! Schema version check for the client database.
//!
//! Every other command migrates the database on open. This one opens it
//! untouched, so a trainer can see which schema an older `fitdays.db` is on
//! before anything is written to it.

use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    /// List the applied schema versions with their dates
    #[arg(long)]
    history: bool,

    /// Bring the schema up to date
    #[arg(long, conflicts_with = "history")]
    apply: bool,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let path = Db::default_path()?;
    if args.apply {
        Db::open(&path)?;
    }

    let conn = Db::open_without_migrations(&path)?;
    let manager = MigrationManager::new();
    let version = get_db_version(&conn)?;
    let pending = manager.latest_version().saturating_sub(version);

    msg_print!(Message::DatabaseVersion(version));
    if needs_migration(&conn)? {
        msg_info!(Message::MigrationsFound(pending as usize));
        msg_info!(Message::DatabaseNeedsUpdate);
    } else {
        msg_info!(Message::DatabaseUpToDate);
    }

    // a fresh file has no tracking table yet
    if !args.history || version == 0 {
        return Ok(());
    }
    msg_print!(Message::MigrationHistory, true);
    View::migrations(&manager.get_migration_history(&conn)?)
}
