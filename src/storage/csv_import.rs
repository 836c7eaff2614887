//! CSV import of expense records
//!
//! Reads a spreadsheet-style expense log with a header row naming the columns
//! `date,category,subcategory,description,amount,vendor` and an optional
//! `status` column. Column order does not matter.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{CostError, CostResult};
use crate::models::{ExpenseStatus, Money, RawExpense};

const REQUIRED_COLUMNS: [&str; 6] = [
    "date",
    "category",
    "subcategory",
    "description",
    "amount",
    "vendor",
];

/// Column positions resolved from the header row
struct ColumnMap {
    positions: HashMap<&'static str, usize>,
    status: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> CostResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let mut positions = HashMap::new();
        for column in REQUIRED_COLUMNS {
            let index = find(column)
                .ok_or_else(|| CostError::missing_field("expense CSV header", column))?;
            positions.insert(column, index);
        }

        Ok(Self {
            positions,
            status: find("status"),
        })
    }

    fn get<'r>(&self, row: &'r StringRecord, column: &'static str) -> Option<&'r str> {
        self.positions.get(column).and_then(|&i| row.get(i))
    }
}

/// Import expenses from a CSV file
pub fn import_expenses_csv<P: AsRef<Path>>(path: P) -> CostResult<Vec<RawExpense>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| CostError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    read_expenses_csv(file)
}

/// Read expenses from any CSV source
pub fn read_expenses_csv<R: Read>(source: R) -> CostResult<Vec<RawExpense>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let mut expenses = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        expenses.push(parse_row(&columns, &row, &format!("expense #{}", i + 1))?);
    }

    tracing::debug!(records = expenses.len(), "imported expenses from CSV");
    Ok(expenses)
}

fn parse_row(columns: &ColumnMap, row: &StringRecord, label: &str) -> CostResult<RawExpense> {
    let text = |column: &'static str| {
        columns
            .get(row, column)
            .map(str::to_string)
            .ok_or_else(|| CostError::missing_field(label, column))
    };

    let amount_text = columns
        .get(row, "amount")
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CostError::missing_field(label, "amount"))?;
    let amount = Money::parse(amount_text)
        .map_err(|e| CostError::bad_field(label, "amount", e.to_string()))?;
    if amount.is_negative() {
        return Err(CostError::bad_field(label, "amount", "must not be negative"));
    }

    let status = match columns.status.and_then(|i| row.get(i)).filter(|s| !s.is_empty()) {
        None => None,
        Some(s) => Some(ExpenseStatus::parse(s).ok_or_else(|| {
            CostError::bad_field(label, "status", format!("must be 'paid' or 'unpaid', found '{}'", s))
        })?),
    };

    Ok(RawExpense {
        date: text("date")?,
        category: text("category")?,
        subcategory: text("subcategory")?,
        description: text("description")?,
        amount,
        vendor: text("vendor")?,
        status,
    })
}
