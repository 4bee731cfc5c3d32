use crate::{error::ConfigError, loader::ConfigFormat, loader::ConfigLayer, Result};
use std::path::Path;

pub fn parse(content: &str, origin: Option<&Path>) -> Result<ConfigLayer> {
    serde_json::from_str(content).map_err(|e| {
        let position = (e.line() > 0).then(|| (e.line(), Some(e.column())));
        ConfigError::parse(ConfigFormat::Json, origin, content, e.to_string(), position)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_nested_sections() {
        let layer = parse(r#"{ "routing": { "max_relaxations": 42 } }"#, None).unwrap();
        assert_eq!(layer.routing.max_relaxations, Some(42));
    }

    #[test]
    fn syntax_error_points_at_column() {
        let json = "{\n  \"routing\": {\n    \"max_relaxations\": ,\n  }\n}";
        match parse(json, None) {
            Err(ConfigError::Parse { excerpt: Some(excerpt), origin, .. }) => {
                assert!(excerpt.contains('^'));
                assert_eq!(origin, "<inline>");
            }
            other => panic!("expected JSON parse error, got {other:?}"),
        }
    }
}
