use crate::{error::ConfigError, loader::ConfigFormat, loader::ConfigLayer, Result};
use std::path::Path;

pub fn parse(content: &str, origin: Option<&Path>) -> Result<ConfigLayer> {
    ::toml::from_str(content).map_err(|e| {
        let position = e.span().map(|span| (line_of(content, span.start), None));
        ConfigError::parse(ConfigFormat::Toml, origin, content, e.message(), position)
    })
}

/// 1-based line containing byte `offset`.
fn line_of(content: &str, offset: usize) -> usize {
    let end = offset.min(content.len());
    content.as_bytes()[..end].iter().filter(|b| **b == b'\n').count() + 1
}
