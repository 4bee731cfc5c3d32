//! Routing configuration

use serde::{Deserialize, Serialize};

/// Limits applied to every shortest-path query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingConfig {
    /// Maximum number of successful relaxations per query
    ///
    /// Guards against unbounded queue growth on very large or adversarial
    /// road networks. A query that needs more fails instead of running on.
    #[serde(default = "default_max_relaxations")]
    pub max_relaxations: usize,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_relaxations: default_max_relaxations(),
        }
    }
}

impl crate::validation::Validate for RoutingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_at_least("routing.max_relaxations", self.max_relaxations, 1)
    }
}

fn default_max_relaxations() -> usize {
    1_000_000
}
