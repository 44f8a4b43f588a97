//! # Fitdays - package and day accounting for personal trainers
//!
//! A command-line utility for managing fitness clients and tracking where
//! each of them is in their training package.
//!
//! ## Features
//!
//! - **Day Accounting**: Current day, days left and progress for every client
//! - **Pauses**: Paused days extend the package instead of consuming it
//! - **Lifecycle**: Add, pause, resume, stop, renew and delete clients
//! - **Package History**: Calendars of current and archived packages
//! - **Activity Log**: One note per client and day
//! - **Data Export**: Export analyses to CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fitdays::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
