//! Display implementation for fitdays application messages.
//!
//! Every user-facing sentence lives here, so command code only ever names a
//! [`Message`] variant and its parameters.
//!
//! ```rust
//! use fitdays::libs::messages::Message;
//!
//! let message = Message::ClientRenewed("Anna".to_string(), 2);
//! assert_eq!(message.to_string(), "Anna renewed, now on package #2");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CLIENT MESSAGES ===
            Message::ClientCreated(name, id) => format!("Client '{}' created with ID {}", name, id),
            Message::ClientNotFound(id) => format!("Client with ID {} not found", id),
            Message::ClientDeleted(name) => format!("Client '{}' deleted", name),
            Message::ClientPaused(name, date) => format!("{} paused from {}", name, date),
            Message::ClientResumed(name, date) => format!("{} resumed on {}", name, date),
            Message::ClientStopped(name, date) => format!("{} stopped on {}", name, date),
            Message::ClientRenewed(name, number) => format!("{} renewed, now on package #{}", name, number),
            Message::ClientCompleted(name) => format!("{} has completed their package", name),
            Message::ClientsCompletedCount(count) => format!("{} package(s) marked as completed", count),
            Message::ClientRecordMalformed(id) => format!("Client {} has a malformed start date and cannot be analysed", id),
            Message::NoClientsFound => "No clients found".to_string(),
            Message::ClientsHeader => "Clients".to_string(),
            Message::ClientHeader(name) => format!("Client: {}", name),
            Message::ConfirmDeleteClient(name) => format!("Delete '{}' with all packages, pauses and activities?", name),
            Message::TransitionRejected(reason) => format!("Cannot update client: {}", reason),

            // === PACKAGE MESSAGES ===
            Message::PausesHeader => "Pauses".to_string(),
            Message::NoPausesRecorded => "No pauses recorded for this package".to_string(),
            Message::PackagesHeader(name) => format!("Package history for {}", name),
            Message::NoArchivedPackages(name) => format!("{} has no archived packages yet", name),
            Message::PackageNotFound(client_id, number) => format!("Package #{} not found for client {}", number, client_id),
            Message::CalendarHeader(name, number, month) => format!("{} - package #{} - {}", name, number, month),
            Message::CalendarLegend => "dd NN = day of month and package day, -- = paused, .. = outside the package, * = activity logged".to_string(),

            // === ACTIVITY MESSAGES ===
            Message::ActivityLogged(name, date) => format!("Activity logged for {} on {}", name, date),
            Message::ActivityDeleted(id) => format!("Activity {} deleted", id),
            Message::ActivityNotFound(id) => format!("Activity with ID {} not found", id),
            Message::ActivitiesHeader(name) => format!("Activities for {}", name),
            Message::NoActivitiesFound(name) => format!("No activities logged for {}", name),

            // === INPUT MESSAGES ===
            Message::InvalidDate(input, reason) => format!("Invalid date '{}': {} (use DD/MM/YYYY or 'today')", input, reason),
            Message::InvalidMonth(input) => format!("Invalid month '{}' (use MM/YYYY)", input),
            Message::InvalidPackageDays(days) => format!("Package length must be at least one day, got {}", days),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults apply".to_string(),
            Message::ConfigModulePackages => "Packages".to_string(),
            Message::ConfigModuleDatabase => "Database".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDefaultPackageDays => "Default package length in days".to_string(),
            Message::PromptAutoComplete => "Mark finished packages as completed automatically".to_string(),
            Message::PromptDatabasePath => "Database file path".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };

        write!(f, "{}", text)
    }
}
