//! Core library modules for the fitdays application.
//!
//! ## Features
//!
//! - **Day Accounting**: Date primitives, pause accounting, day analysis and
//!   package-scoped day numbers
//! - **Lifecycle**: Pause, resume, stop and renew transitions over snapshots
//! - **Core Infrastructure**: Configuration, data storage, messaging, logging
//! - **User Interface**: Console tables, calendars, data export, formatting
//!
//! ## Usage
//!
//! ```rust
//! use fitdays::libs::analysis::analyze;
//! use fitdays::libs::date::parse_date;
//! use fitdays::libs::lifecycle::new_package;
//!
//! let start = parse_date("01/01/2024").unwrap();
//! let snapshot = new_package(start, 30).unwrap();
//! let analysis = analyze(&snapshot, parse_date("10/01/2024").unwrap());
//! assert_eq!(analysis.current_day, 10);
//! assert_eq!(analysis.days_remaining, 21);
//! ```

pub mod analysis;
pub mod client;
pub mod config;
pub mod data_storage;
pub mod date;
pub mod export;
pub mod formatter;
pub mod lifecycle;
pub mod logging;
pub mod messages;
pub mod package;
pub mod pause;
pub mod view;
