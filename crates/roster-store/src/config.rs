//! Store configuration.

use std::path::PathBuf;

/// Environment variable for overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "ROSTER_DATA_DIR";

/// Data directory used when neither a flag nor the environment names one.
pub const DEFAULT_DATA_DIR: &str = ".roster";

/// Storage key holding the serialized collection.
pub const STORAGE_KEY: &str = "employee_dashboard_data";

/// Storage key that receives unparseable data before it is first overwritten.
pub const BACKUP_KEY: &str = "employee_dashboard_data_unreadable";

/// Get the default data directory.
///
/// Checks the `ROSTER_DATA_DIR` environment variable first, then falls back
/// to `.roster/` relative to the working directory.
pub fn default_data_dir() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_DIR_ENV_VAR)
        && !root.trim().is_empty()
    {
        return PathBuf::from(root);
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Options controlling store start-up.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Populate sample records when the loaded collection is empty.
    pub seed_when_empty: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed_when_empty: true,
        }
    }
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed_when_empty(mut self, enable: bool) -> Self {
        self.seed_when_empty = enable;
        self
    }
}
