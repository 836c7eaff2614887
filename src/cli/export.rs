//! CLI command for dashboard export
//!
//! Writes the dashboard document as JSON, YAML or CSV sections.

use std::path::PathBuf;

use chrono::Local;
use clap::{Args, ValueEnum};

use super::report::ReportInputs;
use crate::config::{ProjectPaths, Settings};
use crate::error::CostResult;
use crate::export::{csv, json, yaml, DashboardExport};
use crate::storage::write_atomic;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Dashboard document as JSON
    Json,
    /// Dashboard document as YAML
    Yaml,
    /// Dashboard tables as CSV sections
    Csv,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

/// Arguments for `buildcost export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file (default: reports/dashboard_data.<format> in the data directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write JSON without indentation
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub inputs: ReportInputs,
}

/// Default export location for a format
pub fn default_output(paths: &ProjectPaths, format: ExportFormat) -> PathBuf {
    paths
        .reports_dir()
        .join(format!("dashboard_data.{}", format.extension()))
}

/// Handle the export command
pub fn handle_export_command(
    paths: &ProjectPaths,
    settings: &Settings,
    args: ExportArgs,
) -> CostResult<()> {
    let (settings, report) = args.inputs.generate(paths, settings)?;
    let export = DashboardExport::build(&report, &settings, Local::now().naive_local());

    let output = match args.output {
        Some(path) => path,
        None => {
            paths.ensure_directories()?;
            default_output(paths, args.format)
        }
    };

    let pretty = !args.compact;
    write_atomic(&output, |writer| match args.format {
        ExportFormat::Json => json::export_dashboard_json(&export, writer, pretty),
        ExportFormat::Yaml => yaml::export_dashboard_yaml(&export, writer),
        ExportFormat::Csv => csv::export_dashboard_csv(&export, writer),
    })?;

    tracing::info!(file = %output.display(), format = ?args.format, "exported dashboard");
    println!(
        "Dashboard exported to: {} ({} expenses)",
        output.display(),
        export.daily_expenses.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_output() {
        let paths = ProjectPaths::with_base_dir(PathBuf::from("/tmp/house"));
        assert_eq!(
            default_output(&paths, ExportFormat::Yaml),
            PathBuf::from("/tmp/house/reports/dashboard_data.yaml")
        );
    }

    #[test]
    fn test_export_writes_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::with_base_dir(temp_dir.path().to_path_buf());
        let args = ExportArgs {
            format: ExportFormat::Json,
            output: None,
            compact: true,
            inputs: ReportInputs::default(),
        };

        handle_export_command(&paths, &Settings::default(), args).unwrap();

        let written =
            std::fs::read_to_string(default_output(&paths, ExportFormat::Json)).unwrap();
        let imported = json::import_dashboard_json(&written).unwrap();
        assert!(imported.daily_expenses.is_empty());
        assert_eq!(imported.pending_purchases.len(), 1);
    }
}
