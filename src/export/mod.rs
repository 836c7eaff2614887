//! Export module for buildcost
//!
//! Writes the dashboard document in several formats:
//! - JSON: the document the HTML dashboard reads
//! - YAML: the same document for reading by hand
//! - CSV: the dashboard tables as spreadsheet sections

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_dashboard_csv;
pub use json::{export_dashboard_json, import_dashboard_json, DashboardExport, ProjectInfo};
pub use yaml::{export_dashboard_yaml, import_dashboard_yaml};
