//! # Workhours
//!
//! A command-line work-hours tracker: start and end workdays, take breaks,
//! and see time worked net of unpaid break overage.
//!
//! ## Features
//!
//! - **Workday Tracking**: Start/end workdays with an append-only event log
//! - **Break Accounting**: Breaks reduce worked time only past the paid allowance
//! - **Live Tally**: Time worked is computed "as of now" while the day is open
//! - **Local Users**: Per-user settings and history in a local SQLite store
//!
//! ## Usage
//!
//! ```rust,no_run
//! use workhours::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
