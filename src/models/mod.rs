//! Core data models for buildcost
//!
//! This module contains the data structures of the construction budget domain:
//! money amounts, the fee schedule, expenses and pending work.

pub mod expense;
pub mod fee_schedule;
pub mod money;
pub mod pending;

pub use expense::{Expense, ExpenseStatus, RawExpense};
pub use fee_schedule::{FeeSchedule, FeeTier};
pub use money::Money;
pub use pending::{OutstandingBalance, PendingPurchaseItem, CONTINGENCY_CATEGORY};
