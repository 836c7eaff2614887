//! Pending work models
//!
//! Outstanding balances owed to specialist vendors and purchases that have not
//! been made yet.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Category of the synthetic contingency row appended to pending purchases
pub const CONTINGENCY_CATEGORY: &str = "Miscellaneous & Contingency";

/// Money owed to a vendor for work already performed
///
/// A zero amount means the vendor is fully paid; such entries stay in the list
/// as a record of the settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutstandingBalance {
    pub vendor: String,
    pub description: String,
    pub amount: Money,
    /// Free-form due date ("To be scheduled", "Completed", a date)
    pub due_date: String,
}

impl OutstandingBalance {
    pub fn new(
        vendor: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            description: description.into(),
            amount,
            due_date: due_date.into(),
        }
    }

    /// Whether the balance has been settled
    pub fn is_settled(&self) -> bool {
        self.amount.is_zero()
    }
}

/// A purchase still to be made
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingPurchaseItem {
    pub category: String,
    pub description: String,
    pub amount: Money,
}

impl PendingPurchaseItem {
    pub fn new(category: impl Into<String>, description: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    /// The contingency row for a given percentage and estimate
    pub fn contingency(percent: u32, amount: Money) -> Self {
        Self::new(
            CONTINGENCY_CATEGORY,
            format!(
                "Estimated miscellaneous costs ({}% of remaining work) - includes transport, food, accommodation, unexpected items",
                percent
            ),
            amount,
        )
    }

    pub fn is_contingency(&self) -> bool {
        self.category == CONTINGENCY_CATEGORY
    }
}
