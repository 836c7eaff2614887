//! Storage layer for buildcost
//!
//! Loads the source records (expenses, outstanding balances, pending
//! purchases) from the data directory, validating every record on the way in,
//! and writes them back with atomic writes.

pub mod csv_import;
pub mod file_io;
pub mod records;

pub use csv_import::{import_expenses_csv, read_expenses_csv};
pub use file_io::{read_json_value, write_atomic, write_json_atomic};
pub use records::{parse_records, FromRecord};

use std::path::Path;

use crate::config::paths::ProjectPaths;
use crate::error::CostResult;
use crate::models::{OutstandingBalance, PendingPurchaseItem, RawExpense};

/// The full set of source records for one project
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectData {
    pub expenses: Vec<RawExpense>,
    pub outstanding_balances: Vec<OutstandingBalance>,
    pub pending_purchases: Vec<PendingPurchaseItem>,
}

impl ProjectData {
    /// Load all source records from the data directory
    ///
    /// Missing files count as empty lists.
    pub fn load(paths: &ProjectPaths) -> CostResult<Self> {
        let data = Self {
            expenses: load_records(&paths.expenses_file())?,
            outstanding_balances: load_records(&paths.outstanding_balances_file())?,
            pending_purchases: load_records(&paths.pending_purchases_file())?,
        };

        tracing::info!(
            expenses = data.expenses.len(),
            outstanding = data.outstanding_balances.len(),
            purchases = data.pending_purchases.len(),
            dir = %paths.data_dir().display(),
            "loaded project data"
        );

        Ok(data)
    }

    /// Replace the expense list with records from another file (JSON or CSV)
    pub fn with_expenses_from(mut self, path: &Path) -> CostResult<Self> {
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        self.expenses = if is_csv {
            import_expenses_csv(path)?
        } else {
            load_records(path)?
        };

        tracing::info!(
            expenses = self.expenses.len(),
            file = %path.display(),
            "loaded expenses override"
        );
        Ok(self)
    }

    /// Write all source records to the data directory
    pub fn save(&self, paths: &ProjectPaths) -> CostResult<()> {
        write_json_atomic(paths.expenses_file(), &self.expenses)?;
        write_json_atomic(paths.outstanding_balances_file(), &self.outstanding_balances)?;
        write_json_atomic(paths.pending_purchases_file(), &self.pending_purchases)?;
        Ok(())
    }
}

fn load_records<T: FromRecord>(path: &Path) -> CostResult<Vec<T>> {
    match read_json_value(path)? {
        Some(document) => parse_records(&document),
        None => {
            tracing::info!(file = %path.display(), "no {} file, using an empty list", T::KIND);
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn sample() -> ProjectData {
        ProjectData {
            expenses: vec![RawExpense::new("15/09/2025", "Materials", "Cement", Money::from_units(7500))],
            outstanding_balances: vec![OutstandingBalance::new(
                "Plumber",
                "Remaining balance",
                Money::from_units(12000),
                "To be scheduled",
            )],
            pending_purchases: vec![PendingPurchaseItem::new("Paint", "4 ltrs silk", Money::from_units(3000))],
        }
    }

    #[test]
    fn test_missing_files_load_empty() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(ProjectData::load(&paths).unwrap(), ProjectData::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::with_base_dir(temp_dir.path().to_path_buf());

        sample().save(&paths).unwrap();
        let loaded = ProjectData::load(&paths).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_bad_record_aborts_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(
            paths.outstanding_balances_file(),
            r#"[{"vendor": "Painter", "description": "Balance", "amount": 16000}]"#,
        )
        .unwrap();

        let err = ProjectData::load(&paths).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid outstanding balance #1: field 'due_date' is missing"
        );
    }

    #[test]
    fn test_expenses_override_from_csv() {
        let temp_dir = TempDir::new().unwrap();
        let csv_path = temp_dir.path().join("log.csv");
        std::fs::write(
            &csv_path,
            "date,category,subcategory,description,amount,vendor\n20/09/2025,Labor,Fundi,Wages UNPAID,4000,Fundi\n",
        )
        .unwrap();

        let data = sample().with_expenses_from(&csv_path).unwrap();
        assert_eq!(data.expenses.len(), 1);
        assert_eq!(data.expenses[0].category, "Labor");
        assert_eq!(data.pending_purchases.len(), 1);
    }
}
