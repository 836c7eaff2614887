//! Path management for buildcost
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` on the command line
//! 2. `BUILDCOST_DATA_DIR` environment variable (if set)
//! 3. The platform config directory for `buildcost` (via `directories`)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::CostError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUILDCOST_DATA_DIR";

/// Manages all paths used by buildcost
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    /// Base directory for settings, data files and reports
    base_dir: PathBuf,
}

impl ProjectPaths {
    /// Create a new ProjectPaths instance from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, CostError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ProjectPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding the source records
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default destination for exported documents
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    pub fn outstanding_balances_file(&self) -> PathBuf {
        self.data_dir().join("outstanding_balances.json")
    }

    pub fn pending_purchases_file(&self) -> PathBuf {
        self.data_dir().join("pending_purchases.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), CostError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CostError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CostError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.reports_dir())
            .map_err(|e| CostError::Io(format!("Failed to create reports directory: {}", e)))?;

        Ok(())
    }

    /// Check if a project has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, CostError> {
    ProjectDirs::from("", "", "buildcost")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            CostError::Config(format!(
                "Could not determine a config directory; set {}",
                DATA_DIR_ENV
            ))
        })
}
