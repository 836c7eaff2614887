//! Configuration module for buildcost
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - Project settings (budget, fee schedule, contingency rule)

pub mod paths;
pub mod settings;

pub use paths::ProjectPaths;
pub use settings::Settings;
