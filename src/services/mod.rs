//! Service layer for buildcost
//!
//! Each service borrows the project settings and turns expense, balance and
//! purchase records into the computed figures the reports show.

pub mod category;
pub mod expense;
pub mod pending;
pub mod summary;
pub mod totals;

pub use category::{CategoryAggregator, CategorySummaryRow};
pub use expense::ExpenseProcessor;
pub use pending::{PendingAmounts, PendingCalculator};
pub use summary::{SummaryAggregator, SummaryStats};
pub use totals::ProjectTotals;
