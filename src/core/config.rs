//! Per-call print configuration

use super::environment::Environment;
use super::error::Result;
use super::log_level::LogLevel;
use super::options::FormatOptions;
use serde::Deserialize;

/// Configuration carried by one call, or captured as facade defaults.
///
/// # Example
///
/// ```
/// use console_print::{Color, Environment, FormatOptions, PrintConfig};
///
/// let config = PrintConfig::new()
///     .environment(Environment::Development)
///     .options(FormatOptions::new().show_timestamp(true).color(Color::Cyan));
/// assert_eq!(config.environment, Some(Environment::Development));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintConfig {
    pub environment: Option<Environment>,
    pub log_level: Option<LogLevel>,
    pub options: FormatOptions,
}

impl PrintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    #[must_use]
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    #[must_use]
    pub fn options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse configuration text, e.g. a settings file.
    ///
    /// Unlike trailing call arguments this is strict: any field that does
    /// not parse fails the whole document with [`PrintError::JsonError`].
    ///
    /// [`PrintError::JsonError`]: super::error::PrintError::JsonError
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Merge `over` on top of `self`; options merge field by field
    #[must_use]
    pub fn layer(&self, over: &PrintConfig) -> PrintConfig {
        PrintConfig {
            environment: over.environment.or(self.environment),
            log_level: over.log_level.or(self.log_level),
            options: self.options.layer(&over.options),
        }
    }
}

impl From<FormatOptions> for PrintConfig {
    fn from(options: FormatOptions) -> Self {
        PrintConfig::new().options(options)
    }
}
