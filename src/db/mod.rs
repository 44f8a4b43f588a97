//! Database layer for the fitdays application.
//!
//! SQLite storage for client records. The tables hold plain rows with dates
//! as `DD/MM/YYYY` text; all day accounting happens in [`crate::libs`] on
//! snapshots built from those rows.
//!
//! ## Modules
//!
//! - **db**: Connection management
//! - **migrations**: Versioned schema changes
//! - **clients**: Client rows, live pauses and lifecycle transitions
//! - **packages**: Packages archived on renewal
//! - **activities**: Daily activity log

pub mod activities;
pub mod clients;
pub mod db;
pub mod migrations;
pub mod packages;
