//! Project totals
//!
//! Combines spending to date with pending amounts into committed totals and
//! the projected completion cost.

use serde::{Deserialize, Serialize};

use super::pending::PendingAmounts;
use super::summary::SummaryStats;
use crate::config::Settings;
use crate::models::Money;

/// Final roll-up of the budget position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTotals {
    /// Paid total cost plus pending (outstanding + unpaid labor)
    pub total_committed: Money,
    /// Committed total as a percentage of the budget
    pub percentage_used_inclusive: f64,
    /// Budget minus committed total
    pub effective_balance: Money,
    /// Committed total plus pending purchases with contingency
    pub total_project_cost: Money,
    /// Projected cost minus budget; negative when under budget
    pub additional_funds_needed: Money,
    /// Everything not yet paid or bought
    pub total_not_yet_paid: Money,
    /// Additional funds needed as a percentage of the budget
    pub overrun_percentage: f64,
    /// Paid total cost minus budget
    pub spent_over_budget: Money,
}

impl ProjectTotals {
    /// Roll up the summary and pending amounts against the budget
    pub fn compute(summary: &SummaryStats, pending: &PendingAmounts, settings: &Settings) -> Self {
        let total_budget = settings.total_budget;

        let total_committed = summary.total_cost + pending.total_pending;
        let total_not_yet_paid =
            pending.total_pending + pending.total_pending_purchases_with_contingency;
        let total_project_cost = summary.total_cost + total_not_yet_paid;
        let additional_funds_needed = total_project_cost - total_budget;

        if additional_funds_needed.is_positive() {
            tracing::warn!(
                project = %settings.project_name,
                shortfall = %additional_funds_needed,
                "projected cost exceeds the budget"
            );
        }

        Self {
            total_committed,
            percentage_used_inclusive: total_committed.percentage_of(total_budget),
            effective_balance: total_budget - total_committed,
            total_project_cost,
            additional_funds_needed,
            total_not_yet_paid,
            overrun_percentage: additional_funds_needed.percentage_of(total_budget),
            spent_over_budget: summary.total_cost - total_budget,
        }
    }

    pub fn needs_more_funds(&self) -> bool {
        self.additional_funds_needed.is_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::PendingCalculator;
    use crate::models::{OutstandingBalance, PendingPurchaseItem};

    fn summary(total_cost: i64, budget: i64) -> SummaryStats {
        let total_cost = Money::from_units(total_cost);
        let budget = Money::from_units(budget);
        SummaryStats {
            total_spent: total_cost,
            total_mpesa_fees: Money::zero(),
            total_cost,
            balance_remaining: budget - total_cost,
            percentage_used: total_cost.percentage_of(budget),
            paid_count: 1,
        }
    }

    #[test]
    fn test_totals_under_budget() {
        let settings = Settings::with_budget(Money::from_units(1_000_000));
        let pending = PendingCalculator::new(&settings).pending(
            &[],
            &[OutstandingBalance::new("Painter", "Balance", Money::from_units(200), "Soon")],
            &[PendingPurchaseItem::new("Paint", "Silk", Money::from_units(100))],
        );

        let totals = ProjectTotals::compute(&summary(2025, 1_000_000), &pending, &settings);

        assert_eq!(totals.total_committed, Money::from_units(2225));
        assert_eq!(totals.effective_balance, Money::from_units(997_775));
        assert_eq!(totals.total_not_yet_paid, Money::from_units(345));
        assert_eq!(totals.total_project_cost, Money::from_units(2370));
        assert_eq!(totals.additional_funds_needed, Money::from_units(-997_630));
        assert_eq!(totals.percentage_used_inclusive, 0.2225);
        assert!(!totals.needs_more_funds());
    }

    #[test]
    fn test_totals_over_budget() {
        let settings = Settings::with_budget(Money::from_units(100_000));
        let pending = PendingCalculator::new(&settings).pending(
            &[],
            &[],
            &[PendingPurchaseItem::new("Construction Work", "Veranda", Money::from_units(30_000))],
        );

        let totals = ProjectTotals::compute(&summary(90_000, 100_000), &pending, &settings);

        // 30,000 + 4,500 contingency
        assert_eq!(totals.total_project_cost, Money::from_units(124_500));
        assert_eq!(totals.additional_funds_needed, Money::from_units(24_500));
        assert_eq!(totals.overrun_percentage, 24.5);
        assert_eq!(totals.spent_over_budget, Money::from_units(-10_000));
        assert!(totals.needs_more_funds());
    }
}
