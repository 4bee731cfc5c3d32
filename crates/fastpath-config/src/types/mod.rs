//! Configuration type definitions
//!
//! This module contains all configuration structures organized by concern.
//! Each type is self-contained with validation and sensible defaults.

pub mod logging;
pub mod names;
pub mod routing;
pub mod store;

// Re-export all types for convenience
pub use logging::LoggingConfig;
pub use names::{NameCase, NamesConfig};
pub use routing::RoutingConfig;
pub use store::StoreConfig;

use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
///
/// This is the top-level configuration that users interact with.
/// It's organized by functional area for clarity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Persistence settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Shortest-path search limits
    #[serde(default)]
    pub routing: RoutingConfig,

    /// City name normalization
    #[serde(default)]
    pub names: NamesConfig,

    /// Log filter defaults
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.store.validate()?;
        self.routing.validate()?;
        self.names.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}
