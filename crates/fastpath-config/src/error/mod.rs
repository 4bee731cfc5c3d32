//! Errors raised while loading or validating configuration

pub mod format;

use crate::loader::ConfigFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use format::ErrorFormatter;

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("unsupported configuration file {} (use .toml, .yml, .yaml or .json)", path.display())]
    UnknownFormat { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Syntax, type or unknown-key error in a config file. `excerpt` holds
    /// the offending lines when the parser reports a position.
    #[error("invalid {format} in {origin}: {message}")]
    Parse {
        format: ConfigFormat,
        origin: String,
        message: String,
        excerpt: Option<String>,
    },

    #[error("{key} = '{value}' is not one of {}", options.join(", "))]
    UnknownChoice {
        key: &'static str,
        value: String,
        options: &'static [&'static str],
    },

    #[error("{key} must be at least {min}, got {value}")]
    BelowMinimum {
        key: &'static str,
        value: usize,
        min: usize,
    },

    #[error("{var}: {message}")]
    Env { var: String, message: String },

    #[error("{key}: {message}")]
    Invalid { key: &'static str, message: String },
}

impl ConfigError {
    /// Build a [`ConfigError::Parse`]. `position` is a 1-based line and an
    /// optional 1-based column.
    pub(crate) fn parse(
        format: ConfigFormat,
        origin: Option<&Path>,
        content: &str,
        message: impl Into<String>,
        position: Option<(usize, Option<usize>)>,
    ) -> Self {
        Self::Parse {
            format,
            origin: origin.map_or_else(|| "<inline>".to_string(), |p| p.display().to_string()),
            message: message.into(),
            excerpt: position.and_then(|(line, column)| excerpt(content, line, column)),
        }
    }

    /// Dotted name of the setting this error is about, e.g. `names.case`.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::UnknownChoice { key, .. }
            | Self::BelowMinimum { key, .. }
            | Self::Invalid { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The valid option an [`ConfigError::UnknownChoice`] value was most
    /// likely a typo of.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownChoice { value, options, .. } => closest(value, options),
            _ => None,
        }
    }
}

fn closest(value: &str, options: &[&'static str]) -> Option<&'static str> {
    let value = value.to_lowercase();
    options
        .iter()
        .map(|option| (edit_distance(&value, option), *option))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, option)| option)
}

/// Levenshtein distance over chars, single-row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}

/// The reported line with one line of context on each side, marked with `>`.
fn excerpt(content: &str, line: usize, column: Option<usize>) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();
    if line == 0 || line > lines.len() {
        return None;
    }

    let first = line.saturating_sub(1).max(1);
    let last = (line + 1).min(lines.len());
    let mut out = Vec::new();
    for n in first..=last {
        let marker = if n == line { '>' } else { ' ' };
        out.push(format!("{marker} {n:>3} | {}", lines[n - 1]));
        if n == line {
            if let Some(col) = column.filter(|c| *c > 0) {
                out.push(format!("      | {}^", " ".repeat(col - 1)));
            }
        }
    }
    Some(out.join("\n"))
}
