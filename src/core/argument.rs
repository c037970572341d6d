//! Call arguments and trailing-configuration extraction
//!
//! Facade methods take an ordered argument list. The last argument may carry
//! the call's configuration, either as an explicit [`Argument::Config`] or as
//! a JSON object holding one of the recognized keys `environment`,
//! `logLevel` or `options`.
//!
//! The structural check is knowingly loose: a message payload that is an
//! object with one of those keys is taken as configuration. Wrap such a
//! payload in another value (or pass an explicit empty config last) to print
//! it verbatim.

use super::config::PrintConfig;
use super::options::{ContextData, FormatOptions};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Keys that make a trailing JSON object count as configuration
pub const CONFIG_KEYS: [&str; 3] = ["environment", "logLevel", "options"];

/// Zero-argument callback, used by the conditional `when` method
pub type Callback = Box<dyn FnOnce()>;

pub enum Argument {
    Message(Value),
    Config(PrintConfig),
    Callback(Callback),
}

impl Argument {
    pub fn callback<F>(f: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Argument::Callback(Box::new(f))
    }

    /// Message from any serializable value; a serialization failure becomes
    /// a readable placeholder message.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => Argument::Message(value),
            Err(e) => Argument::Message(Value::String(format!("[unserializable: {}]", e))),
        }
    }

    pub fn is_callback(&self) -> bool {
        matches!(self, Argument::Callback(_))
    }

    /// Split off configuration; anything else is handed back unchanged.
    pub fn into_config(self) -> Result<PrintConfig, Argument> {
        match self {
            Argument::Config(config) => Ok(config),
            Argument::Message(Value::Object(map)) if is_config_object(&map) => {
                Ok(config_from_object(&map))
            }
            other => Err(other),
        }
    }

    /// Value handed to the console for this argument
    pub fn into_message(self) -> Value {
        match self {
            Argument::Message(value) => value,
            Argument::Config(config) => Value::String(format!("{:?}", config)),
            Argument::Callback(_) => Value::String("[Function]".to_string()),
        }
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Message(value) => f.debug_tuple("Message").field(value).finish(),
            Argument::Config(config) => f.debug_tuple("Config").field(config).finish(),
            Argument::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Whether `value` has the shape of a configuration object
pub fn is_config_shape(value: &Value) -> bool {
    value.as_object().is_some_and(is_config_object)
}

fn is_config_object(map: &Map<String, Value>) -> bool {
    CONFIG_KEYS.iter().any(|key| map.contains_key(*key))
}

/// Parse a configuration object field by field. Recognized fields holding
/// values that do not parse are dropped; unknown keys are ignored.
fn config_from_object(map: &Map<String, Value>) -> PrintConfig {
    let environment = map
        .get("environment")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok());
    let log_level = map
        .get("logLevel")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok());
    let options = map
        .get("options")
        .and_then(Value::as_object)
        .map(options_from_object)
        .unwrap_or_default();

    PrintConfig {
        environment,
        log_level,
        options,
    }
}

/// Same leniency for the nested options object, one key at a time
fn options_from_object(map: &Map<String, Value>) -> FormatOptions {
    let flag = |key: &str| map.get(key).and_then(Value::as_bool);
    let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);

    FormatOptions {
        show_timestamp: flag("showTimestamp"),
        show_type: flag("showType"),
        show_environment_type: flag("showEnvironmentType"),
        show_caller_info: flag("showCallerInfo"),
        show_stack_trace: flag("showStackTrace"),
        color: map
            .get("color")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok()),
        styles: text("styles"),
        prefix_message: text("prefixMessage"),
        context_data: map.get("contextData").cloned().map(ContextData::Value),
        condition: None,
    }
}

/// Separate trailing configuration from the message arguments.
pub fn extract_config(mut args: Vec<Argument>) -> (Vec<Value>, PrintConfig) {
    let config = match args.pop() {
        None => return (Vec::new(), PrintConfig::default()),
        Some(last) => match last.into_config() {
            Ok(config) => config,
            Err(last) => {
                args.push(last);
                PrintConfig::default()
            }
        },
    };

    let messages = args.into_iter().map(Argument::into_message).collect();
    (messages, config)
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Argument::Message(value)
    }
}

impl From<PrintConfig> for Argument {
    fn from(config: PrintConfig) -> Self {
        Argument::Config(config)
    }
}

impl From<FormatOptions> for Argument {
    fn from(options: FormatOptions) -> Self {
        Argument::Config(options.into())
    }
}

impl From<Callback> for Argument {
    fn from(callback: Callback) -> Self {
        Argument::Callback(callback)
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Message(Value::String(s.to_string()))
    }
}

impl From<&String> for Argument {
    fn from(s: &String) -> Self {
        Argument::Message(Value::String(s.clone()))
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::Message(Value::String(s))
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Argument {
                fn from(v: $ty) -> Self {
                    Argument::Message(Value::from(v))
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
