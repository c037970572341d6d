//! Macros for building argument lists and printing with full call-site
//! information.
//!
//! The level macros record file, line, column and the enclosing function's
//! name, so caller information includes a function name, which the plain
//! `#[track_caller]` methods cannot provide.
//!
//! # Examples
//!
//! ```
//! use console_print::prelude::*;
//! use console_print::{info, warn};
//! use std::sync::Arc;
//!
//! let console = Arc::new(MemoryConsole::new());
//! let print = Print::builder()
//!     .console(console.clone())
//!     .without_ambient_environment()
//!     .build();
//!
//! info!(print, "Server listening on port", 8080);
//! warn!(print, "Retry", 3, FormatOptions::new().show_type(true));
//!
//! assert_eq!(console.len(), 2);
//! assert_eq!(console.last().unwrap().prefix, "[WARN]");
//! ```

/// Build a `Vec<Argument>` from heterogeneous values.
///
/// ```
/// use console_print::{args, Argument, FormatOptions};
///
/// let list: Vec<Argument> = args!["answer", 42, true, FormatOptions::new().show_type(true)];
/// assert_eq!(list.len(), 4);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Argument>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Argument::from($arg)),+]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Capture the current file, line, column and function as a `CallSite`.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), line!(), column!()).with_function($crate::__function_name!())
    };
}

/// Direct invocation, the equivalent of calling the facade itself.
#[macro_export]
macro_rules! call {
    ($print:expr $(, $arg:expr)* $(,)?) => {
        $print.emit($crate::Method::Call, $crate::call_site!(), $crate::args![$($arg),*])
    };
}

/// Print on the log channel.
#[macro_export]
macro_rules! log {
    ($print:expr $(, $arg:expr)* $(,)?) => {
        $print.emit($crate::Method::Log, $crate::call_site!(), $crate::args![$($arg),*])
    };
}

/// Print on the info channel, blue unless configured otherwise.
#[macro_export]
macro_rules! info {
    ($print:expr $(, $arg:expr)* $(,)?) => {
        $print.emit($crate::Method::Info, $crate::call_site!(), $crate::args![$($arg),*])
    };
}

/// Print on the warn channel, yellow unless configured otherwise.
#[macro_export]
macro_rules! warn {
    ($print:expr $(, $arg:expr)* $(,)?) => {
        $print.emit($crate::Method::Warn, $crate::call_site!(), $crate::args![$($arg),*])
    };
}

/// Print on the error channel, red unless configured otherwise.
#[macro_export]
macro_rules! error {
    ($print:expr $(, $arg:expr)* $(,)?) => {
        $print.emit($crate::Method::Error, $crate::call_site!(), $crate::args![$($arg),*])
    };
}

/// Debug output, with context data, stack trace and caller block support.
#[macro_export]
macro_rules! debug {
    ($print:expr $(, $arg:expr)* $(,)?) => {
        $print.emit($crate::Method::Debug, $crate::call_site!(), $crate::args![$($arg),*])
    };
}

/// Conditional printing, see `Print::when`.
#[macro_export]
macro_rules! when {
    ($print:expr, $condition:expr $(, $arg:expr)* $(,)?) => {
        $print.emit_when($condition, $crate::call_site!(), $crate::args![$($arg),*])
    };
}
