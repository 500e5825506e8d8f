//! Configuration errors and collected validation diagnostics.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML in config")]
    Toml(#[from] toml::de::Error),

    #[error("invalid option: {0}")]
    Validation(String),

    // Printed in full by Display; no source, or the report repeats itself
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One finding about one config field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.severity {
            Severity::Error => "error".red().bold().to_string(),
            Severity::Warning => "warning".yellow().bold().to_string(),
        };
        write!(f, "{marker} {}: {}", self.field, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {hint}", "hint:".dimmed())?;
        }
        Ok(())
    }
}

/// Diagnostics gathered while validating every section.
///
/// Validation never stops at the first problem: all sections report, then
/// the caller decides through [`ConfigDiagnostics::into_result`].
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    items: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, field: FieldPath, message: String, hint: Option<String>) {
        self.items.push(ConfigDiagnostic {
            severity,
            field,
            message,
            hint,
        });
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Error, field, message.into(), Some(hint.into()));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Warning, field, message.into(), None);
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.by_severity(Severity::Warning)
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.items.iter().filter(move |d| d.severity == severity)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn print_warnings(&self) {
        for warning in self.warnings() {
            crate::log!("config"; "{}", warning);
        }
    }

    /// `Err(self)` when at least one error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors().count();
        write!(f, "config validation failed ({count} error{})", if count == 1 { "" } else { "s" })?;
        for diagnostic in self.errors() {
            write!(f, "\n{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

impl From<ConfigDiagnostics> for ConfigError {
    fn from(diag: ConfigDiagnostics) -> Self {
        Self::Diagnostics(diag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_names_file() {
        let err = ConfigError::Io(
            PathBuf::from("assetmap.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "cannot read config `assetmap.toml`");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("watch.debounce_ms"), "0 disables debouncing");
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().count(), 1);
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_errors_collected() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("manifest.seed"), "seed must be a table");
        diag.error_with_hint(
            FieldPath::new("manifest.file_name"),
            "must not be empty",
            "default is `manifest.json`",
        );
        diag.warn(FieldPath::new("watch.debounce_ms"), "ignored in output");

        let err = diag.into_result().unwrap_err();
        let display = err.to_string();
        assert!(display.contains("2 errors"));
        assert!(display.contains("manifest.file_name"));
        assert!(display.contains("default is `manifest.json`"));
        assert!(!display.contains("ignored in output"));
    }
}
