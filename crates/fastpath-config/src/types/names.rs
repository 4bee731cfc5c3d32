//! City name normalization settings

use serde::{Deserialize, Serialize};

/// How raw city names are folded before lookup and storage
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NamesConfig {
    /// Case folding applied after trimming
    #[serde(default)]
    pub case: NameCase,
}

/// Case folding mode
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NameCase {
    /// "Tbilisi" -> "TBILISI"
    #[default]
    Upper,
    /// "Tbilisi" -> "tbilisi"
    Lower,
    /// Keep the name as typed (whitespace is still trimmed)
    Preserve,
}

impl NameCase {
    pub const OPTIONS: [&'static str; 3] = ["upper", "lower", "preserve"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "upper" => Some(NameCase::Upper),
            "lower" => Some(NameCase::Lower),
            "preserve" => Some(NameCase::Preserve),
            _ => None,
        }
    }
}

impl crate::validation::Validate for NamesConfig {
    fn validate(&self) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_upper() {
        assert_eq!(NamesConfig::default().case, NameCase::Upper);
    }

    #[test]
    fn test_case_serialization() {
        assert_eq!(serde_json::to_string(&NameCase::Lower).unwrap(), "\"lower\"");
        let parsed: NameCase = serde_json::from_str("\"preserve\"").unwrap();
        assert_eq!(parsed, NameCase::Preserve);
    }

    #[test]
    fn test_parse() {
        assert_eq!(NameCase::parse("UPPER"), Some(NameCase::Upper));
        assert_eq!(NameCase::parse("title"), None);
    }
}
