use anyhow::{anyhow, Context, Result};
use fastpath_config::{Config, ConfigBuilder, ConfigLayer, ErrorFormatter};
use fastpath_graph::RoutePlanner;
use fastpath_store::RoadStore;
use std::path::Path;

/// Load layered configuration: file, then `FASTPATH_*`, then `--db`.
pub fn load_config(config_path: Option<&Path>, db: Option<&Path>) -> Result<Config> {
    let builder = match config_path {
        Some(p) => ConfigBuilder::new().with_file(p),
        None => ConfigBuilder::new().with_default_file(),
    };
    let flags = db.map(ConfigLayer::store_path).unwrap_or_default();

    builder
        .with_env()
        .with_overrides(flags)
        .build()
        .map_err(|err| anyhow!("{}", ErrorFormatter::new(err)))
}

/// Configuration plus the opened road store shared by command handlers.
pub struct AppContext {
    pub config: Config,
    pub store: RoadStore,
}

impl AppContext {
    pub fn open(config: Config) -> Result<Self> {
        if let Some(parent) = config.store.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create store directory {}", parent.display())
                })?;
            }
        }
        let store = RoadStore::from_config(&config)?;
        Ok(Self { config, store })
    }

    pub fn into_planner(self) -> RoutePlanner<RoadStore> {
        RoutePlanner::from_config(self.store, &self.config.routing)
    }
}
