//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard for package defaults and the database
//! location, or removes the saved configuration with `--delete`.

use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    ///
    /// Without a configuration file fitdays falls back to 30-day packages,
    /// automatic completion and a database in the data directory.
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
///
/// # Arguments
///
/// * `init_args` - Parsed command-line arguments containing options
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        msg_info!(Message::ConfigDeleted);
        return Ok(());
    }

    // Prompts are prefilled with the current values
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
