//! Logging defaults

use serde::{Deserialize, Serialize};

pub const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Default log filter, used when `RUST_LOG` is not set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl crate::validation::Validate for LoggingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_one_of("logging.level", &self.level, &LEVELS)
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        assert!(LoggingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unknown_level_invalid() {
        let config = LoggingConfig {
            level: "verbose".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
