//! Print facade
//!
//! [`Print`] is the public entry point: per-level methods, a conditional
//! `when`, and `call` for direct invocation. A facade captures its default
//! configuration once, at construction, and layers it under every call.

use super::{
    argument::{extract_config, Argument},
    caller::CallSite,
    config::PrintConfig,
    console::Console,
    environment::{ambient_from_process, Environment},
    formatter::Formatter,
    log_level::LogLevel,
    metrics::PrintMetrics,
    options::FormatOptions,
    timestamp::TimestampFormat,
};
use crate::consoles::StdConsole;
use std::sync::{Arc, OnceLock};

/// Facade entry points, as seen by the macros
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Direct invocation; behaves like `log` but lets config pick the level
    Call,
    Log,
    Warn,
    Error,
    Info,
    Debug,
}

impl Method {
    /// Level a method enforces over any configured one
    pub fn forced_level(&self) -> Option<LogLevel> {
        match self {
            Method::Call | Method::Log => None,
            Method::Warn => Some(LogLevel::Warn),
            Method::Error => Some(LogLevel::Error),
            Method::Info => Some(LogLevel::Info),
            Method::Debug => Some(LogLevel::Debug),
        }
    }
}

pub struct Print {
    defaults: PrintConfig,
    formatter: Formatter,
}

impl Print {
    /// Facade with no defaults, printing to the terminal
    #[must_use]
    pub fn new() -> Self {
        PrintBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> PrintBuilder {
        PrintBuilder::new()
    }

    pub fn defaults(&self) -> &PrintConfig {
        &self.defaults
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn metrics(&self) -> &PrintMetrics {
        self.formatter.metrics()
    }

    /// Direct invocation
    #[track_caller]
    pub fn call(&self, args: Vec<Argument>) {
        self.emit(Method::Call, CallSite::caller(), args);
    }

    #[track_caller]
    pub fn log(&self, args: Vec<Argument>) {
        self.emit(Method::Log, CallSite::caller(), args);
    }

    #[track_caller]
    pub fn warn(&self, args: Vec<Argument>) {
        self.emit(Method::Warn, CallSite::caller(), args);
    }

    #[track_caller]
    pub fn error(&self, args: Vec<Argument>) {
        self.emit(Method::Error, CallSite::caller(), args);
    }

    #[track_caller]
    pub fn info(&self, args: Vec<Argument>) {
        self.emit(Method::Info, CallSite::caller(), args);
    }

    #[track_caller]
    pub fn debug(&self, args: Vec<Argument>) {
        self.emit(Method::Debug, CallSite::caller(), args);
    }

    /// Conditional printing.
    ///
    /// When `condition` is false nothing happens at all. When it is true and
    /// the first two arguments are both callbacks, the first one runs and
    /// everything else is ignored; the second callback is an else-branch
    /// that can never run here. Otherwise the arguments are printed as with
    /// [`Print::call`].
    ///
    /// # Example
    ///
    /// ```
    /// use console_print::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let console = Arc::new(MemoryConsole::new());
    /// let print = Print::builder()
    ///     .console(console.clone())
    ///     .without_ambient_environment()
    ///     .build();
    ///
    /// print.when(false, args!["never shown"]);
    /// print.when(true, args!["shown"]);
    /// assert_eq!(console.len(), 1);
    /// ```
    #[track_caller]
    pub fn when(&self, condition: bool, args: Vec<Argument>) {
        self.emit_when(condition, CallSite::caller(), args);
    }

    /// Run one facade method with an explicitly captured call site
    pub fn emit(&self, method: Method, site: CallSite, args: Vec<Argument>) {
        let (messages, call_config) = extract_config(args);
        let config = self.merge(method, &call_config);

        match method {
            Method::Debug => self.formatter.format_debug(messages, config, site),
            _ => self.formatter.format(messages, config, site),
        }
    }

    pub fn emit_when(&self, condition: bool, site: CallSite, args: Vec<Argument>) {
        if !condition {
            return;
        }

        if args.len() >= 2 && args[0].is_callback() && args[1].is_callback() {
            if let Some(Argument::Callback(then)) = args.into_iter().next() {
                then();
            }
            return;
        }

        self.emit(Method::Call, site, args);
    }

    /// Configuration a call through `method` runs with.
    ///
    /// Options, lowest first: level color, facade defaults, call options.
    /// Leveled methods then force their own level; `log` only supplies `Log`
    /// as the lowest layer.
    pub fn merge(&self, method: Method, call: &PrintConfig) -> PrintConfig {
        match method.forced_level() {
            Some(level) => {
                let level_defaults = PrintConfig::from(
                    FormatOptions::new().color(level.default_color()),
                );
                let mut merged = level_defaults.layer(&self.defaults).layer(call);
                merged.log_level = Some(level);
                merged
            }
            None => {
                let base = match method {
                    Method::Log => PrintConfig::new().log_level(LogLevel::Log),
                    _ => PrintConfig::new(),
                };
                base.layer(&self.defaults).layer(call)
            }
        }
    }
}

impl Default for Print {
    fn default() -> Self {
        Self::new()
    }
}

enum AmbientSource {
    Process,
    Fixed(Option<String>),
}

/// Builder for [`Print`]
///
/// # Example
///
/// ```
/// use console_print::prelude::*;
///
/// let print = Print::builder()
///     .environment(Environment::Development)
///     .options(FormatOptions::new().show_timestamp(true).color(Color::Blue))
///     .ambient_environment("development")
///     .timestamp_format(TimestampFormat::TimeOfDayMillis)
///     .build();
///
/// assert_eq!(print.defaults().environment, Some(Environment::Development));
/// ```
pub struct PrintBuilder {
    defaults: PrintConfig,
    console: Option<Arc<dyn Console>>,
    ambient: AmbientSource,
    timestamp_format: TimestampFormat,
    metrics: Option<Arc<PrintMetrics>>,
}

impl PrintBuilder {
    pub fn new() -> Self {
        Self {
            defaults: PrintConfig::default(),
            console: None,
            ambient: AmbientSource::Process,
            timestamp_format: TimestampFormat::default(),
            metrics: None,
        }
    }

    /// Replace the default configuration wholesale
    #[must_use = "builder methods return a new value"]
    pub fn defaults(mut self, defaults: PrintConfig) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.defaults.environment = Some(environment);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.defaults.log_level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: FormatOptions) -> Self {
        self.defaults.options = options;
        self
    }

    /// Output target; the terminal when not set
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = Some(console);
        self
    }

    /// Environment the program runs in, compared against each call's
    /// configured environment
    #[must_use = "builder methods return a new value"]
    pub fn ambient_environment(mut self, ambient: impl Into<String>) -> Self {
        self.ambient = AmbientSource::Fixed(Some(ambient.into()));
        self
    }

    /// Disable environment gating
    #[must_use = "builder methods return a new value"]
    pub fn without_ambient_environment(mut self) -> Self {
        self.ambient = AmbientSource::Fixed(None);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Share metrics between several facades
    #[must_use = "builder methods return a new value"]
    pub fn metrics(mut self, metrics: Arc<PrintMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Build the facade. Without an explicit ambient environment, the
    /// `RUST_ENV` variable is read here, once.
    pub fn build(self) -> Print {
        let console = self
            .console
            .unwrap_or_else(|| Arc::new(StdConsole::new()) as Arc<dyn Console>);
        let ambient = match self.ambient {
            AmbientSource::Process => ambient_from_process(),
            AmbientSource::Fixed(ambient) => ambient,
        };

        let mut formatter = Formatter::new(console)
            .with_ambient_environment(ambient)
            .with_timestamp_format(self.timestamp_format);
        if let Some(metrics) = self.metrics {
            formatter = formatter.with_metrics(metrics);
        }

        Print {
            defaults: self.defaults,
            formatter,
        }
    }
}

impl Default for PrintBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Facade with `defaults` captured as its lowest configuration layer
///
/// # Example
///
/// ```no_run
/// use console_print::prelude::*;
///
/// let dev = create_print(
///     PrintConfig::new()
///         .environment(Environment::Development)
///         .options(FormatOptions::new().show_timestamp(true).color(Color::Blue)),
/// );
/// dev.log(args!["This is a development log"]);
/// ```
#[must_use]
pub fn create_print(defaults: PrintConfig) -> Print {
    Print::builder().defaults(defaults).build()
}

/// Shared facade with no defaults, printing to the terminal
pub fn print() -> &'static Print {
    static PRINT: OnceLock<Print> = OnceLock::new();
    PRINT.get_or_init(Print::new)
}
