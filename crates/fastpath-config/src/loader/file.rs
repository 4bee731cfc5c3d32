//! Config file reading

use crate::{
    error::ConfigError,
    loader::{formats, ConfigFormat, ConfigLayer},
    Result,
};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read and parse one config file into a layer. Validation happens after
/// all layers are applied.
pub fn load_layer(path: &Path) -> Result<ConfigLayer> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnknownFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    formats::parse(format, &content, Some(path))
}
