//! Validation trait and helpers for configuration types

use crate::error::{ConfigError, Result};

/// Checks a fully merged config section. Errors name the dotted key they
/// are about so the formatter can say where to fix it.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_at_least(key: &'static str, value: usize, min: usize) -> Result<()> {
    if value < min {
        return Err(ConfigError::BelowMinimum { key, value, min });
    }
    Ok(())
}

/// Case-insensitive membership in a fixed option set.
pub fn validate_one_of(
    key: &'static str,
    value: &str,
    options: &'static [&'static str],
) -> Result<()> {
    if options.iter().any(|opt| opt.eq_ignore_ascii_case(value)) {
        return Ok(());
    }
    Err(ConfigError::UnknownChoice {
        key,
        value: value.to_string(),
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_is_inclusive() {
        assert!(validate_at_least("routing.max_relaxations", 1, 1).is_ok());
        assert!(matches!(
            validate_at_least("routing.max_relaxations", 0, 1),
            Err(ConfigError::BelowMinimum { value: 0, min: 1, .. })
        ));
    }

    #[test]
    fn one_of_is_case_insensitive() {
        assert!(validate_one_of("logging.level", "INFO", &["info", "debug"]).is_ok());
    }

    #[test]
    fn one_of_suggests_closest() {
        let err = validate_one_of("logging.level", "inf", &["info", "debug"]).unwrap_err();
        assert_eq!(err.suggestion(), Some("info"));
        assert_eq!(err.key(), Some("logging.level"));
    }
}
