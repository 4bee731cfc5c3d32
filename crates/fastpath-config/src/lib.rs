//! Configuration for fastpath
//!
//! Settings come from layers applied in order over the defaults: a config
//! file (TOML, YAML or JSON), `FASTPATH_*` environment variables, then
//! programmatic overrides such as command-line flags. A layer only changes
//! the settings it names. The merged result is validated once, and
//! [`ErrorFormatter`] renders failures with the file excerpt and the
//! variable that would fix them.
//!
//! ```no_run
//! use fastpath_config::Config;
//!
//! // First of .fastpath.{toml,yml,yaml,json} in the working directory, if any
//! let config = Config::load()?;
//!
//! // Or a specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! let db_path = config.store.path;
//! let budget = config.routing.max_relaxations;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, ErrorFormatter, Result};
pub use loader::{ConfigBuilder, ConfigLayer};
pub use types::*;
pub use validation::Validate;
