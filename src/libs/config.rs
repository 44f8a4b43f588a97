//! Configuration management for the fitdays application.
//!
//! Settings live in a JSON file in the platform data directory. Every section
//! is optional, so a missing file or a missing section simply means defaults.
//!
//! ## Configuration Structure
//!
//! - **Packages**: Default package length and automatic completion
//! - **Database**: Location of the SQLite database file
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\fitdays\fitdays\config.json`
//! - **macOS**: `~/Library/Application Support/fitdays/fitdays/config.json`
//! - **Linux**: `~/.local/share/fitdays/fitdays/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use fitdays::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let days = config.packages.unwrap_or_default().default_package_days;
//! println!("New packages run for {} days", days);
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Package accounting defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PackageConfig {
    /// Package length used by `add` and `renew` when `--days` is not given.
    pub default_package_days: i64,

    /// Persist the completed status when listing clients whose package ran out.
    ///
    /// With this off, `list` still shows the package as completed but leaves
    /// the stored status untouched until the next resume.
    pub auto_complete: bool,
}

/// Database location override.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

/// Main configuration container.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<PackageConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Default for PackageConfig {
    /// Thirty-day packages that complete on their own.
    fn default() -> Self {
        PackageConfig {
            default_package_days: 30,
            auto_complete: true,
        }
    }
}

impl Config {
    /// Reads the configuration from the data directory.
    ///
    /// A missing file is not an error; it yields `Config::default()`.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit file.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration to the data directory as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Saves the configuration to an explicit file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard, prefilled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [
            ConfigModule {
                key: "packages".to_string(),
                name: Message::ConfigModulePackages.to_string(),
            },
            ConfigModule {
                key: "database".to_string(),
                name: Message::ConfigModuleDatabase.to_string(),
            },
        ];
        let names: Vec<&str> = modules.iter().map(|module| module.name.as_str()).collect();

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&names)
            .interact()?;

        for index in selected {
            match modules[index].key.as_str() {
                "packages" => {
                    let current = config.packages.clone().unwrap_or_default();
                    config.packages = Some(PackageConfig {
                        default_package_days: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultPackageDays.to_string())
                            .default(current.default_package_days)
                            .validate_with(|days: &i64| if *days > 0 { Ok(()) } else { Err(Message::InvalidPackageDays(*days).to_string()) })
                            .interact_text()?,
                        auto_complete: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAutoComplete.to_string())
                            .default(current.auto_complete)
                            .interact()?,
                    });
                }
                "database" => {
                    let current = match &config.database {
                        Some(database) => database.path.display().to_string(),
                        None => DataStorage::new().get_path(crate::db::db::DB_FILE_NAME)?.display().to_string(),
                    };
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(current)
                        .interact_text()?;
                    config.database = Some(DatabaseConfig { path: PathBuf::from(path) });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
