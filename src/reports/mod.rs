//! Reports module for buildcost
//!
//! Generates the project cost report and renders it for the terminal.

pub mod console;
pub mod project;

pub use console::{ConsoleReport, ReportSection};
pub use project::ProjectReport;
