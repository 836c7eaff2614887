//! Expense models
//!
//! A `RawExpense` is a line from the daily expense log as supplied by the data
//! files. An `Expense` is the same record annotated with its transaction fee,
//! total cost and payment status.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Payment status of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    /// Money has left the account; counts toward spending
    Paid,
    /// Work done but not yet paid; counts toward pending totals only
    Unpaid,
}

impl ExpenseStatus {
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }

    /// Parse a status name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Some(Self::Paid),
            "unpaid" => Some(Self::Unpaid),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => write!(f, "paid"),
            Self::Unpaid => write!(f, "unpaid"),
        }
    }
}

/// An expense record as loaded from the data files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawExpense {
    /// Date as written in the source (e.g. "15/09/2025")
    pub date: String,
    pub category: String,
    pub subcategory: String,
    pub description: String,
    pub amount: Money,
    pub vendor: String,

    /// Explicit payment status; when absent the description marker decides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ExpenseStatus>,
}

impl RawExpense {
    /// Create a new raw expense with no explicit status
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            subcategory: String::new(),
            description: description.into(),
            amount,
            vendor: String::new(),
            status: None,
        }
    }

    /// Resolve the payment status, using `unpaid_marker` when no explicit status is set
    pub fn resolve_status(&self, unpaid_marker: &str) -> ExpenseStatus {
        match self.status {
            Some(status) => status,
            None if !unpaid_marker.is_empty() && self.description.contains(unpaid_marker) => {
                ExpenseStatus::Unpaid
            }
            None => ExpenseStatus::Paid,
        }
    }
}

/// An expense annotated with fee, total cost and status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub date: String,
    pub category: String,
    pub subcategory: String,
    pub description: String,
    pub amount: Money,
    pub vendor: String,
    /// Transaction fee; zero for unpaid expenses
    pub mpesa_fee: Money,
    /// Amount plus fee; zero for unpaid expenses
    pub total_cost: Money,
    pub status: ExpenseStatus,
}

impl Expense {
    /// Annotate a paid expense with its fee
    pub fn paid(raw: &RawExpense, fee: Money) -> Self {
        Self::annotate(raw, fee, raw.amount + fee, ExpenseStatus::Paid)
    }

    /// Annotate an unpaid expense; fee and total cost stay at zero
    pub fn unpaid(raw: &RawExpense) -> Self {
        Self::annotate(raw, Money::zero(), Money::zero(), ExpenseStatus::Unpaid)
    }

    fn annotate(raw: &RawExpense, mpesa_fee: Money, total_cost: Money, status: ExpenseStatus) -> Self {
        Self {
            date: raw.date.clone(),
            category: raw.category.clone(),
            subcategory: raw.subcategory.clone(),
            description: raw.description.clone(),
            amount: raw.amount,
            vendor: raw.vendor.clone(),
            mpesa_fee,
            total_cost,
            status,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }
}
