//! CLI command handlers
//!
//! Each submodule holds the clap argument types and the handler for one
//! group of commands.

pub mod export;
pub mod fee;
pub mod project;
pub mod report;
pub mod validate;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use fee::{handle_fee_command, handle_fees_command};
pub use project::{handle_config_command, handle_init_command};
pub use report::{handle_report_command, ReportArgs, ReportInputs};
pub use validate::handle_validate_command;
