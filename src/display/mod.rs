//! Display formatting for terminal output
//!
//! Provides utilities for formatting report figures for terminal display,
//! including tables, labelled lines and bar charts.

pub mod report;
pub mod tables;

pub use report::{format_money_signed, format_percentage, section_header};
pub use tables::{
    format_balance_table, format_category_table, format_fee_table, format_purchase_table,
    format_unpaid_table,
};
