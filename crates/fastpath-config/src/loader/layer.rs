//! Partial configuration holding only the values one source sets

use crate::{Config, NameCase};
use serde::Deserialize;
use std::path::PathBuf;

/// What a single source (file, environment, command line) says about the
/// configuration. `None` means "not set here", so a later layer can restore
/// a default value over an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub store: StoreLayer,
    pub routing: RoutingLayer,
    pub names: NamesLayer,
    pub logging: LoggingLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreLayer {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutingLayer {
    pub max_relaxations: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamesLayer {
    pub case: Option<NameCase>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingLayer {
    pub level: Option<String>,
}

impl ConfigLayer {
    /// Layer that only relocates the database.
    pub fn store_path(path: impl Into<PathBuf>) -> Self {
        let mut layer = Self::default();
        layer.store.path = Some(path.into());
        layer
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite every setting this layer names and leave the rest alone.
    pub fn apply(self, config: &mut Config) {
        if let Some(path) = self.store.path {
            config.store.path = path;
        }
        if let Some(max_relaxations) = self.routing.max_relaxations {
            config.routing.max_relaxations = max_relaxations;
        }
        if let Some(case) = self.names.case {
            config.names.case = case;
        }
        if let Some(level) = self.logging.level {
            config.logging.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_layer_changes_nothing() {
        let mut config = Config::default();
        config.routing.max_relaxations = 7;
        let before = config.clone();

        let layer = ConfigLayer::default();
        assert!(layer.is_empty());
        layer.apply(&mut config);
        assert_eq!(config, before);
    }

    #[test]
    fn set_default_value_still_overrides() {
        let mut config = Config::default();
        config.names.case = NameCase::Lower;

        let mut layer = ConfigLayer::default();
        layer.names.case = Some(NameCase::Upper);
        layer.apply(&mut config);

        assert_eq!(config.names.case, NameCase::Upper);
    }

    #[test]
    fn only_named_settings_change() {
        let mut config = Config::default();
        config.logging.level = "warn".to_string();

        ConfigLayer::store_path("/srv/roads").apply(&mut config);

        assert_eq!(config.store.path, PathBuf::from("/srv/roads"));
        assert_eq!(config.logging.level, "warn");
    }
}
