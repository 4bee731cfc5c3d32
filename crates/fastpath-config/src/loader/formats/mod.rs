//! Format-specific parsers. Each maps its parser's error position onto
//! [`ConfigError::Parse`](crate::ConfigError::Parse).

pub mod json;
pub mod toml;
pub mod yaml;

use crate::{loader::ConfigFormat, loader::ConfigLayer, Result};
use std::path::Path;

/// Parse `content` as `format`. Blank input is an empty layer in every format.
pub fn parse(format: ConfigFormat, content: &str, origin: Option<&Path>) -> Result<ConfigLayer> {
    if content.trim().is_empty() {
        return Ok(ConfigLayer::default());
    }
    match format {
        ConfigFormat::Yaml => yaml::parse(content, origin),
        ConfigFormat::Toml => toml::parse(content, origin),
        ConfigFormat::Json => json::parse(content, origin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_empty_layer() {
        for format in [ConfigFormat::Yaml, ConfigFormat::Toml, ConfigFormat::Json] {
            assert!(parse(format, "  \n", None).unwrap().is_empty());
        }
    }
}
