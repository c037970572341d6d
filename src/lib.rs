//! # Console Print
//!
//! Configurable console printing: messages are decorated with optional
//! prefixes (caller location, timestamp, environment, level), styled, gated
//! by environment or predicate, and written to the matching console channel.
//!
//! ## Features
//!
//! - **Per-level facade**: `log`, `info`, `warn`, `error`, `debug` and a
//!   conditional `when`
//! - **Layered configuration**: facade defaults under per-call options under
//!   level colors, merged field by field
//! - **Environment gating**: calls tagged for another environment print nothing
//! - **Debug extras**: context data, stack traces and caller blocks
//!
//! ```
//! use console_print::prelude::*;
//!
//! let print = Print::builder().without_ambient_environment().build();
//! print.log(args!["Hello, world!"]);
//! print.warn(args!["careful", FormatOptions::new().show_type(true)]);
//! ```

#[macro_use]
pub mod macros;

pub mod consoles;
pub mod core;

pub mod prelude {
    pub use crate::args;
    pub use crate::consoles::{MemoryConsole, StdConsole};
    pub use crate::core::{
        create_logger, create_print, print, Argument, CallSite, CallerInfo, Channel, Color,
        Console, ConsoleRecord, Environment, FormatOptions, Formatter, LogLevel, Method, Print,
        PrintBuilder, PrintConfig, PrintError, PrintMetrics, Result, TimestampFormat,
    };
}

pub use self::consoles::{MemoryConsole, StdConsole};
pub use self::core::{
    ambient_from_process, create_logger, create_print, extract_config, inspect, is_config_shape,
    print, Argument, CallSite, CallerInfo, Callback, Channel, Color, Condition, Console,
    ConsoleRecord, ContextData, Environment, FormatOptions, Formatter, LogLevel, Method, Print,
    PrintBuilder, PrintConfig, PrintError, PrintMetrics, ResolvedOptions, Result, StackFrame,
    StackTrace, TimestampFormat, CONFIG_KEYS, ENVIRONMENT_VAR, INVALID_TIMESTAMP_FORMAT,
};
