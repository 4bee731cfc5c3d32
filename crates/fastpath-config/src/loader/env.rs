//! `FASTPATH_*` environment variables
//!
//! Each setting `section.field` maps to `FASTPATH_SECTION_FIELD`:
//! - `FASTPATH_STORE_PATH=/var/lib/fastpath`
//! - `FASTPATH_ROUTING_MAX_RELAXATIONS=50000`
//! - `FASTPATH_NAMES_CASE=lower`
//! - `FASTPATH_LOGGING_LEVEL=debug`

use crate::{error::ConfigError, loader::ConfigLayer, NameCase, Result};
use std::path::PathBuf;

const PREFIX: &str = "FASTPATH_";

/// Every dotted key that can be set from the environment.
pub const KEYS: [&str; 4] = [
    "store.path",
    "routing.max_relaxations",
    "names.case",
    "logging.level",
];

/// Environment variable for a dotted key: `names.case` -> `FASTPATH_NAMES_CASE`.
pub fn var_name(key: &str) -> String {
    format!("{PREFIX}{}", key.replace('.', "_").to_uppercase())
}

/// Layer from the process environment.
pub fn from_env() -> Result<ConfigLayer> {
    from_vars(std::env::vars())
}

/// Layer from `(name, value)` pairs. Names without the `FASTPATH_` prefix
/// are ignored; unknown `FASTPATH_` names are errors.
pub fn from_vars<I>(vars: I) -> Result<ConfigLayer>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut layer = ConfigLayer::default();
    for (var, value) in vars {
        if var.starts_with(PREFIX) {
            set(&mut layer, &var, &value)?;
        }
    }
    Ok(layer)
}

fn set(layer: &mut ConfigLayer, var: &str, value: &str) -> Result<()> {
    let Some(key) = KEYS.iter().copied().find(|key| var_name(key) == var) else {
        return Err(ConfigError::Env {
            var: var.to_string(),
            message: format!(
                "not a fastpath setting (known: {})",
                KEYS.map(var_name).join(", ")
            ),
        });
    };

    match key {
        "store.path" => layer.store.path = Some(PathBuf::from(value)),
        "routing.max_relaxations" => {
            let parsed = value.trim().parse().map_err(|_| ConfigError::Env {
                var: var.to_string(),
                message: format!("'{value}' is not a whole number"),
            })?;
            layer.routing.max_relaxations = Some(parsed);
        }
        "names.case" => {
            let case = NameCase::parse(value).ok_or_else(|| ConfigError::UnknownChoice {
                key: "names.case",
                value: value.to_string(),
                options: &NameCase::OPTIONS,
            })?;
            layer.names.case = Some(case);
        }
        _ => layer.logging.level = Some(value.to_lowercase()),
    }
    Ok(())
}
