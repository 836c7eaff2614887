//! buildcost - construction budget calculator
//!
//! Tracks spending on a building project against a fixed budget: annotates
//! each paid expense with its mobile-money transfer fee, breaks spending down
//! by category, totals what is still owed or still to be bought, and projects
//! the final cost of the project.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and project settings (budget, fee schedule, markers)
//! - `error`: Custom error types
//! - `models`: Money, fee schedule and source records
//! - `storage`: JSON/CSV loading with per-record validation
//! - `services`: Fee annotation and the aggregators
//! - `reports`: The full report pipeline and its console rendering
//! - `display`: Terminal formatting helpers and tables
//! - `export`: Dashboard document as JSON, YAML and CSV
//! - `cli`: Command handlers for the binary
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use buildcost::config::{ProjectPaths, Settings};
//! use buildcost::reports::ProjectReport;
//! use buildcost::storage::ProjectData;
//!
//! let paths = ProjectPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let report = ProjectReport::generate(&settings, &ProjectData::load(&paths)?)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{CostError, CostResult};
