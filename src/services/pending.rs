//! Pending amounts
//!
//! Everything not yet paid: unpaid labor, balances owed to specialist vendors,
//! purchases still to be made, and the contingency estimated on top of them.

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::models::{Expense, Money, OutstandingBalance, PendingPurchaseItem};

/// Money still to be paid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingAmounts {
    /// Expenses carrying the unpaid status
    pub unpaid_expenses: Vec<Expense>,
    /// Sum of outstanding vendor balances
    pub total_outstanding: Money,
    /// Sum of unpaid expense amounts
    pub total_unpaid_labor: Money,
    /// Outstanding balances plus unpaid labor
    pub total_pending: Money,
    /// Sum of pending purchases, before contingency
    pub total_pending_purchases: Money,
    /// Pending purchases plus outstanding balances plus unpaid labor
    pub contingency_base: Money,
    /// Contingency on the base, truncated to whole units
    pub miscellaneous_estimate: Money,
    /// Pending purchases with the contingency row appended last
    pub pending_purchases_with_contingency: Vec<PendingPurchaseItem>,
    /// Pending purchases plus contingency
    pub total_pending_purchases_with_contingency: Money,
}

/// Calculates pending totals and the contingency estimate
pub struct PendingCalculator<'a> {
    settings: &'a Settings,
}

impl<'a> PendingCalculator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Aggregate unpaid expenses, outstanding balances and pending purchases
    pub fn pending(
        &self,
        expenses: &[Expense],
        outstanding_balances: &[OutstandingBalance],
        pending_purchases: &[PendingPurchaseItem],
    ) -> PendingAmounts {
        let unpaid_expenses: Vec<Expense> = expenses
            .iter()
            .filter(|e| !e.is_paid())
            .cloned()
            .collect();

        let total_outstanding: Money = outstanding_balances.iter().map(|b| b.amount).sum();
        let total_unpaid_labor: Money = unpaid_expenses.iter().map(|e| e.amount).sum();
        let total_pending = total_outstanding + total_unpaid_labor;

        let total_pending_purchases: Money = pending_purchases.iter().map(|p| p.amount).sum();

        let percent = self.settings.contingency_percent;
        let contingency_base = total_pending_purchases + total_outstanding + total_unpaid_labor;
        let miscellaneous_estimate = contingency_base.whole_percent(percent);

        let mut pending_purchases_with_contingency = pending_purchases.to_vec();
        pending_purchases_with_contingency
            .push(PendingPurchaseItem::contingency(percent, miscellaneous_estimate));

        tracing::debug!(
            unpaid = unpaid_expenses.len(),
            outstanding = outstanding_balances.len(),
            purchases = pending_purchases.len(),
            contingency = %miscellaneous_estimate,
            "calculated pending amounts"
        );

        PendingAmounts {
            unpaid_expenses,
            total_outstanding,
            total_unpaid_labor,
            total_pending,
            total_pending_purchases,
            contingency_base,
            miscellaneous_estimate,
            pending_purchases_with_contingency,
            total_pending_purchases_with_contingency: total_pending_purchases
                + miscellaneous_estimate,
        }
    }
}
