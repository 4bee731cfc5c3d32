//! Terminal rendering of [`ConfigError`]

use crate::error::ConfigError;
use crate::loader::{env, DEFAULT_PATHS};
use std::fmt;
use yansi::Paint;

/// Renders a [`ConfigError`] for a terminal: the message, the offending
/// lines of a config file, and where the setting can be changed.
pub struct ErrorFormatter {
    error: ConfigError,
    use_colors: bool,
}

impl ErrorFormatter {
    pub fn new(error: ConfigError) -> Self {
        Self {
            error,
            use_colors: supports_color(),
        }
    }

    /// Formatter that never emits ANSI escapes.
    pub fn plain(error: ConfigError) -> Self {
        Self {
            error,
            use_colors: false,
        }
    }

    pub fn error(&self) -> &ConfigError {
        &self.error
    }

    pub fn format(&self) -> String {
        let mut out = self.headline();
        for line in self.details() {
            out.push_str("\n  ");
            out.push_str(&line);
        }
        out
    }

    fn headline(&self) -> String {
        let message = self.error.to_string();
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), message.bold())
        } else {
            format!("error: {message}")
        }
    }

    fn details(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let ConfigError::Parse {
            excerpt: Some(excerpt),
            ..
        } = &self.error
        {
            lines.extend(excerpt.lines().map(str::to_string));
        }
        if let Some(option) = self.error.suggestion() {
            lines.push(self.hint(format!("did you mean '{option}'?")));
        }
        if let Some(key) = self.error.key() {
            lines.push(self.hint(format!(
                "set `{key}` in {} or export {}",
                DEFAULT_PATHS[0],
                env::var_name(key)
            )));
        }
        if let ConfigError::FileNotFound { .. } = self.error {
            lines.push(self.hint(format!(
                "without an explicit file, fastpath reads the first of {}",
                DEFAULT_PATHS.join(", ")
            )));
        }

        lines
    }

    fn hint(&self, text: String) -> String {
        if self.use_colors {
            format!("{} {}", "hint:".cyan().bold(), text)
        } else {
            format!("hint: {text}")
        }
    }
}

/// NO_COLOR wins; otherwise color only when stderr is a terminal.
fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

impl fmt::Display for ErrorFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
