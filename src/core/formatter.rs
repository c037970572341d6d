//! Formatter and dispatcher
//!
//! Turns messages plus a merged [`PrintConfig`] into a [`ConsoleRecord`] and
//! writes it to the matching console channel. The pipeline is straight-line
//! with two silent exits: an ambient environment that does not match the
//! call's environment, and a condition that rejects the messages.
//!
//! Nothing in here returns an error to the caller. A failing console write
//! is reported on stderr and counted in [`PrintMetrics`].

use super::{
    argument::Argument,
    caller::{CallSite, CallerInfo},
    color::Color,
    config::PrintConfig,
    console::{Console, ConsoleRecord},
    environment::{ambient_from_process, Environment},
    log_level::{Channel, LogLevel},
    metrics::PrintMetrics,
    options::ResolvedOptions,
    timestamp::TimestampFormat,
};
use crate::consoles::StdConsole;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

pub struct Formatter {
    console: Arc<dyn Console>,
    /// Environment the process runs in; `None` disables gating
    ambient: Option<String>,
    timestamp_format: TimestampFormat,
    metrics: Arc<PrintMetrics>,
}

impl Formatter {
    /// Formatter writing to `console` with no ambient environment
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self {
            console,
            ambient: None,
            timestamp_format: TimestampFormat::default(),
            metrics: Arc::new(PrintMetrics::new()),
        }
    }

    #[must_use]
    pub fn with_ambient_environment(mut self, ambient: Option<String>) -> Self {
        self.ambient = ambient;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Share a metrics instance with other formatters
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<PrintMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn ambient_environment(&self) -> Option<&str> {
        self.ambient.as_deref()
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn metrics(&self) -> &PrintMetrics {
        &self.metrics
    }

    pub fn console(&self) -> &Arc<dyn Console> {
        &self.console
    }

    /// Format `messages` under `config` and write them out.
    pub fn format(&self, messages: Vec<Value>, config: PrintConfig, site: CallSite) {
        let environment = config.environment.unwrap_or_default();
        if self.is_gated(environment) {
            return;
        }

        let level = config.log_level.unwrap_or_default();
        let options = config.options.resolve(Color::Default);
        let style = options.style_string();

        let mut prefixes = Vec::new();
        if options.show_caller_info {
            prefixes.push(CallerInfo::from_site(&site).prefix());
        }
        prefixes.extend(self.common_prefixes(&options, environment, level));

        if !options.accepts(&messages) {
            self.metrics.record_suppressed_by_condition();
            return;
        }

        self.dispatch(ConsoleRecord {
            channel: level.channel().unwrap_or(Channel::Log),
            prefix: prefixes.join(" "),
            style,
            color: options.color,
            messages,
        });
    }

    /// Record and report environment gating
    pub(crate) fn is_gated(&self, environment: Environment) -> bool {
        let gated = environment.is_gated_by(self.ambient.as_deref());
        if gated {
            self.metrics.record_suppressed_by_environment();
        }
        gated
    }

    /// Timestamp, environment and level segments, in that order
    pub(crate) fn common_prefixes(
        &self,
        options: &ResolvedOptions,
        environment: Environment,
        level: LogLevel,
    ) -> Vec<String> {
        let mut prefixes = Vec::new();
        if options.show_timestamp {
            prefixes.push(format!("[{}]", self.timestamp_format.now()));
        }
        if options.show_environment_type {
            prefixes.push(format!("[{}]", environment.as_str().to_uppercase()));
        }
        if options.show_type {
            prefixes.push(format!("[{}]", level.to_str()));
        }
        prefixes
    }

    pub(crate) fn dispatch(&self, record: ConsoleRecord) {
        match self.console.write(&record) {
            Ok(()) => {
                self.metrics.record_printed();
            }
            Err(e) => {
                self.metrics.record_write_failure();
                eprintln!(
                    "[PRINT ERROR] Console '{}' failed on {} channel: {}",
                    self.console.name(),
                    record.channel,
                    e
                );
            }
        }
    }
}

impl Default for Formatter {
    /// Terminal output, ambient environment read once from the process
    fn default() -> Self {
        Formatter::new(Arc::new(StdConsole::new())).with_ambient_environment(ambient_from_process())
    }
}

fn default_formatter() -> &'static Formatter {
    static DEFAULT: OnceLock<Formatter> = OnceLock::new();
    DEFAULT.get_or_init(Formatter::default)
}

/// Print `args` under `config` without going through a facade.
///
/// # Example
///
/// ```no_run
/// use console_print::{args, create_logger, Color, FormatOptions, PrintConfig};
///
/// create_logger(
///     args!["Hello World"],
///     PrintConfig::new().options(FormatOptions::new().color(Color::Blue)),
/// );
/// ```
#[track_caller]
pub fn create_logger(args: Vec<Argument>, config: PrintConfig) {
    let messages = args.into_iter().map(Argument::into_message).collect();
    default_formatter().format(messages, config, CallSite::caller());
}
