//! Layered configuration loading
//!
//! Every source yields a [`ConfigLayer`] of the values it actually sets.
//! Layers are applied over [`Config::default`] in the order they were added,
//! then the result is validated once.

pub mod env;
pub mod file;
pub mod formats;
pub mod layer;

pub use layer::{ConfigLayer, LoggingLayer, NamesLayer, RoutingLayer, StoreLayer};

use crate::{Config, Result, Validate};
use std::fmt;
use std::path::{Path, PathBuf};

/// File names checked when no explicit file is given, in order.
pub const DEFAULT_PATHS: [&str; 4] = [
    ".fastpath.toml",
    ".fastpath.yml",
    ".fastpath.yaml",
    ".fastpath.json",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Format implied by the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yml" | "yaml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::Json => "JSON",
        })
    }
}

#[derive(Debug, Clone)]
enum ConfigSource {
    File(PathBuf),
    /// First existing entry of [`DEFAULT_PATHS`], if any.
    DefaultFile,
    Environment,
    Overrides(ConfigLayer),
}

/// Builder for layered configuration: defaults, then each added source.
///
/// ```no_run
/// use fastpath_config::{ConfigBuilder, ConfigLayer};
///
/// let config = ConfigBuilder::new()
///     .with_default_file()
///     .with_env()
///     .with_overrides(ConfigLayer::store_path("/srv/roads"))
///     .build()?;
/// # Ok::<(), fastpath_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file; a missing file is an error.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Read the first of [`DEFAULT_PATHS`] found in the working directory.
    pub fn with_default_file(mut self) -> Self {
        self.sources.push(ConfigSource::DefaultFile);
        self
    }

    /// `FASTPATH_<SECTION>_<FIELD>` variables.
    pub fn with_env(mut self) -> Self {
        self.sources.push(ConfigSource::Environment);
        self
    }

    /// Programmatic values, typically from command-line flags.
    pub fn with_overrides(mut self, layer: ConfigLayer) -> Self {
        self.sources.push(ConfigSource::Overrides(layer));
        self
    }

    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        for source in self.sources {
            let layer = match source {
                ConfigSource::File(path) => file::load_layer(&path)?,
                ConfigSource::DefaultFile => match default_file() {
                    Some(path) => file::load_layer(Path::new(path))?,
                    None => continue,
                },
                ConfigSource::Environment => env::from_env()?,
                ConfigSource::Overrides(layer) => layer,
            };
            layer.apply(&mut config);
        }

        config.validate()?;
        Ok(config)
    }
}

/// First of [`DEFAULT_PATHS`] that exists in the working directory.
pub fn default_file() -> Option<&'static str> {
    DEFAULT_PATHS
        .iter()
        .copied()
        .find(|path| Path::new(path).exists())
}

impl Config {
    /// Defaults, then the default file if present, then the environment.
    pub fn load() -> Result<Self> {
        ConfigBuilder::new().with_default_file().with_env().build()
    }

    /// Defaults, then `path`, then the environment.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}

/// Serializes tests that touch `FASTPATH_*` environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigError, NameCase};
    use pretty_assertions::assert_eq;
    use std::env;
    use std::io::Write;

    fn config_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn no_sources_gives_defaults() {
        assert_eq!(ConfigBuilder::new().build().unwrap(), Config::default());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("a.ini")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn env_overrides_file() {
        let _lock = ENV_LOCK.lock().unwrap();
        let file = config_file(".toml", "[names]\ncase = \"lower\"\n\n[routing]\nmax_relaxations = 10\n");

        env::set_var("FASTPATH_ROUTING_MAX_RELAXATIONS", "99");
        let config = ConfigBuilder::new().with_file(file.path()).with_env().build();
        env::remove_var("FASTPATH_ROUTING_MAX_RELAXATIONS");

        let config = config.unwrap();
        assert_eq!(config.names.case, NameCase::Lower);
        assert_eq!(config.routing.max_relaxations, 99);
    }

    #[test]
    fn env_can_restore_a_default_the_file_changed() {
        let _lock = ENV_LOCK.lock().unwrap();
        let file = config_file(".toml", "[names]\ncase = \"lower\"\n");

        env::set_var("FASTPATH_NAMES_CASE", "upper");
        let config = ConfigBuilder::new().with_file(file.path()).with_env().build();
        env::remove_var("FASTPATH_NAMES_CASE");

        assert_eq!(config.unwrap().names.case, NameCase::Upper);
    }

    #[test]
    fn overrides_win_over_env() {
        let _lock = ENV_LOCK.lock().unwrap();
        env::set_var("FASTPATH_STORE_PATH", "/from/env");
        let config = ConfigBuilder::new()
            .with_env()
            .with_overrides(ConfigLayer::store_path("/from/flag"))
            .build();
        env::remove_var("FASTPATH_STORE_PATH");

        assert_eq!(config.unwrap().store.path, PathBuf::from("/from/flag"));
    }

    #[test]
    fn invalid_merged_value_is_rejected() {
        let file = config_file(".json", r#"{"routing": {"max_relaxations": 0}}"#);
        let err = ConfigBuilder::new().with_file(file.path()).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BelowMinimum { key: "routing.max_relaxations", .. }
        ));
    }

    #[test]
    fn later_layer_can_fix_an_earlier_invalid_value() {
        let file = config_file(".yml", "routing:\n  max_relaxations: 0\n");
        let mut layer = ConfigLayer::default();
        layer.routing.max_relaxations = Some(5);

        let config = ConfigBuilder::new()
            .with_file(file.path())
            .with_overrides(layer)
            .build()
            .unwrap();
        assert_eq!(config.routing.max_relaxations, 5);
    }

    #[test]
    fn missing_file_is_error() {
        let result = ConfigBuilder::new().with_file("/definitely/not/here.toml").build();
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }
}
