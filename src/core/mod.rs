//! Core print types and the formatting pipeline

pub mod argument;
pub mod caller;
pub mod color;
pub mod config;
pub mod console;
pub mod debug;
pub mod environment;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod metrics;
pub mod options;
pub mod print;
pub mod stack;
pub mod timestamp;

pub use argument::{extract_config, is_config_shape, Argument, Callback, CONFIG_KEYS};
pub use caller::{CallSite, CallerInfo};
pub use color::Color;
pub use config::PrintConfig;
pub use console::{Console, ConsoleRecord};
pub use environment::{ambient_from_process, Environment, ENVIRONMENT_VAR};
pub use error::{PrintError, Result};
pub use formatter::{create_logger, Formatter};
pub use log_level::{Channel, LogLevel};
pub use metrics::PrintMetrics;
pub use options::{Condition, ContextData, FormatOptions, ResolvedOptions};
pub use print::{create_print, print, Method, Print, PrintBuilder};
pub use stack::{inspect, StackFrame, StackTrace};
pub use timestamp::{TimestampFormat, INVALID_TIMESTAMP_FORMAT};
