//! Custom error types for buildcost
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for buildcost operations
#[derive(Error, Debug)]
pub enum CostError {
    /// Configuration-related errors (bad budget, bad fee schedule, unreadable settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source record is missing a required field or carries an unusable value
    #[error("Invalid {record}: field '{field}' {reason}")]
    InputShape {
        record: String,
        field: &'static str,
        reason: String,
    },

    /// Arithmetic invariant violated by the calculation pipeline
    #[error("Invariant violated: {0}")]
    Invariant(String),

    /// Invalid value passed to a calculation
    #[error("Validation error: {0}")]
    Validation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CostError {
    /// Create an error for a record that lacks a required field
    pub fn missing_field(record: impl Into<String>, field: &'static str) -> Self {
        Self::InputShape {
            record: record.into(),
            field,
            reason: "is missing".into(),
        }
    }

    /// Create an error for a record whose field has the wrong shape
    pub fn bad_field(
        record: impl Into<String>,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InputShape {
            record: record.into(),
            field,
            reason: reason.into(),
        }
    }

    /// Check if this is an ingestion error
    pub fn is_input_shape(&self) -> bool {
        matches!(self, Self::InputShape { .. })
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for CostError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CostError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for CostError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for CostError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for buildcost operations
pub type CostResult<T> = Result<T, CostError>;
