use crate::{error::ConfigError, loader::ConfigFormat, loader::ConfigLayer, Result};
use std::path::Path;

pub fn parse(content: &str, origin: Option<&Path>) -> Result<ConfigLayer> {
    serde_yaml::from_str(content).map_err(|e| {
        let position = e.location().map(|at| (at.line(), Some(at.column())));
        ConfigError::parse(ConfigFormat::Yaml, origin, content, e.to_string(), position)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NameCase;

    #[test]
    fn reads_sections() {
        let layer = parse("routing:\n  max_relaxations: 500\nnames:\n  case: lower\n", None).unwrap();
        assert_eq!(layer.routing.max_relaxations, Some(500));
        assert_eq!(layer.names.case, Some(NameCase::Lower));
    }

    #[test]
    fn empty_mapping_sets_nothing() {
        assert!(parse("{}", None).unwrap().is_empty());
    }

    #[test]
    fn bad_case_names_file_and_value() {
        let err = parse("names:\n  case: shouting\n", Some(Path::new(".fastpath.yml"))).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("invalid YAML in .fastpath.yml"));
        assert!(message.contains("shouting"));
    }
}
