//! YAML dashboard export
//!
//! Writes the dashboard document as YAML for reading or diffing by hand.

use std::io::Write;

use crate::error::{CostError, CostResult};
use crate::export::json::DashboardExport;

/// Write the dashboard document as YAML with a comment header
pub fn export_dashboard_yaml<W: Write>(export: &DashboardExport, writer: &mut W) -> CostResult<()> {
    let info = &export.project_info;

    writeln!(writer, "# {} cost dashboard", info.name)
        .map_err(|e| CostError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.last_updated)
        .map_err(|e| CostError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| CostError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| CostError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| CostError::Export(e.to_string()))?;

    Ok(())
}

/// Read a YAML dashboard document back and check it
pub fn import_dashboard_yaml(yaml_str: &str) -> CostResult<DashboardExport> {
    let export: DashboardExport = serde_yaml::from_str(yaml_str)?;
    export.validate().map_err(CostError::Validation)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Money, RawExpense};
    use crate::reports::ProjectReport;
    use crate::storage::ProjectData;
    use chrono::NaiveDate;

    fn export() -> DashboardExport {
        let settings = Settings::default();
        let data = ProjectData {
            expenses: vec![RawExpense::new(
                "18/09/2025",
                "Plumbing",
                "Pipes",
                Money::from_units(18_000),
            )],
            ..Default::default()
        };
        let report = ProjectReport::generate(&settings, &data).unwrap();
        let at = NaiveDate::from_ymd_opt(2025, 9, 24)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        DashboardExport::build(&report, &settings, at)
    }

    #[test]
    fn test_yaml_export() {
        let mut output = Vec::new();
        export_dashboard_yaml(&export(), &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Home Construction cost dashboard"));
        assert!(yaml.contains("# Generated: 24/09/2025 08:30:00"));
        assert!(yaml.contains("total_mpesa_fees: 171\n"));
        assert!(yaml.contains("mpesa_fee: 171.5"));
        assert!(yaml.contains("category: Plumbing"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let original = export();
        let mut output = Vec::new();
        export_dashboard_yaml(&original, &mut output).unwrap();

        let imported = import_dashboard_yaml(std::str::from_utf8(&output).unwrap()).unwrap();
        assert_eq!(imported.project_info, original.project_info);
        assert_eq!(imported.daily_expenses, original.daily_expenses);
    }
}
