//! Store configuration (database location)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where cities and roads are persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Directory of the sled database
    ///
    /// Relative paths are resolved against the working directory.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl crate::validation::Validate for StoreConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;

        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                key: "store.path",
                message: "cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".fastpath/db")
}
