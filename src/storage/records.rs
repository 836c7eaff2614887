//! Record validation at the ingestion boundary
//!
//! Source files are read as untyped JSON and checked field by field so that a
//! bad record is reported by position and field name. Nothing past this module
//! sees an unvalidated record.

use serde_json::{Map, Value};

use crate::error::{CostError, CostResult};
use crate::models::{ExpenseStatus, Money, OutstandingBalance, PendingPurchaseItem, RawExpense};

/// A record type that can be built from one element of a JSON array
pub trait FromRecord: Sized {
    /// Human-readable record kind used in error messages ("expense")
    const KIND: &'static str;

    fn from_record(record: &Record<'_>) -> CostResult<Self>;
}

/// One JSON object together with its position in the source file
pub struct Record<'a> {
    label: String,
    fields: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    fn new(kind: &str, index: usize, value: &'a Value) -> CostResult<Self> {
        let label = format!("{} #{}", kind, index + 1);
        match value.as_object() {
            Some(fields) => Ok(Self { label, fields }),
            None => Err(CostError::InputShape {
                record: label,
                field: "*",
                reason: "is not an object".into(),
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// A required string field
    pub fn text(&self, field: &'static str) -> CostResult<String> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Err(CostError::missing_field(&self.label, field)),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(CostError::bad_field(
                &self.label,
                field,
                format!("must be a string, found {}", other),
            )),
        }
    }

    /// A required non-negative currency amount
    pub fn amount(&self, field: &'static str) -> CostResult<Money> {
        let amount = match self.fields.get(field) {
            None | Some(Value::Null) => return Err(CostError::missing_field(&self.label, field)),
            Some(Value::Number(n)) => number_to_money(n)
                .ok_or_else(|| {
                CostError::bad_field(
                    &self.label,
                    field,
                    format!("{} exceeds the maximum amount {}", n, Money::MAX),
                )
            })?,
            Some(other) => {
                return Err(CostError::bad_field(
                    &self.label,
                    field,
                    format!("must be a number, found {}", other),
                ))
            }
        };

        if amount.is_negative() {
            return Err(CostError::bad_field(&self.label, field, "must not be negative"));
        }
        Ok(amount)
    }

    /// An optional payment status
    pub fn status(&self, field: &'static str) -> CostResult<Option<ExpenseStatus>> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => ExpenseStatus::parse(s).map(Some).ok_or_else(|| {
                CostError::bad_field(&self.label, field, format!("must be 'paid' or 'unpaid', found '{}'", s))
            }),
            Some(other) => Err(CostError::bad_field(
                &self.label,
                field,
                format!("must be a string, found {}", other),
            )),
        }
    }
}

fn number_to_money(n: &serde_json::Number) -> Option<Money> {
    let amount = match n.as_i64() {
        Some(units) => Money::from_cents(units.checked_mul(100)?),
        None => {
            let cents = (n.as_f64()? * 100.0).round();
            if !cents.is_finite() || cents.abs() > Money::MAX.cents() as f64 {
                return None;
            }
            Money::from_cents(cents as i64)
        }
    };
    Some(amount).filter(Money::in_range)
}

/// Parse every element of a JSON array document into typed records
pub fn parse_records<T: FromRecord>(document: &Value) -> CostResult<Vec<T>> {
    let items = document.as_array().ok_or_else(|| {
        CostError::Storage(format!("Expected a list of {} records", T::KIND))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, value)| T::from_record(&Record::new(T::KIND, i, value)?))
        .collect()
}

impl FromRecord for RawExpense {
    const KIND: &'static str = "expense";

    fn from_record(record: &Record<'_>) -> CostResult<Self> {
        Ok(Self {
            date: record.text("date")?,
            category: record.text("category")?,
            subcategory: record.text("subcategory")?,
            description: record.text("description")?,
            amount: record.amount("amount")?,
            vendor: record.text("vendor")?,
            status: record.status("status")?,
        })
    }
}

impl FromRecord for OutstandingBalance {
    const KIND: &'static str = "outstanding balance";

    fn from_record(record: &Record<'_>) -> CostResult<Self> {
        Ok(Self {
            vendor: record.text("vendor")?,
            description: record.text("description")?,
            amount: record.amount("amount")?,
            due_date: record.text("due_date")?,
        })
    }
}

impl FromRecord for PendingPurchaseItem {
    const KIND: &'static str = "pending purchase";

    fn from_record(record: &Record<'_>) -> CostResult<Self> {
        Ok(Self {
            category: record.text("category")?,
            description: record.text("description")?,
            amount: record.amount("amount")?,
        })
    }
}
