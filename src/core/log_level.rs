//! Log level and output channel definitions

use super::color::Color;
use super::error::PrintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Log,
    Warn,
    Error,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Log => "log",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    /// Uppercased name, as shown in the `[LEVEL]` prefix
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Log => "LOG",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Output channel for this level.
    ///
    /// Only log/warn/error/info own a channel; anything else falls back to
    /// the generic log channel.
    pub fn channel(&self) -> Option<Channel> {
        match self {
            LogLevel::Log => Some(Channel::Log),
            LogLevel::Warn => Some(Channel::Warn),
            LogLevel::Error => Some(Channel::Error),
            LogLevel::Info => Some(Channel::Info),
            LogLevel::Debug => None,
        }
    }

    /// Color the facade applies when neither facade nor call picks one
    pub fn default_color(&self) -> Color {
        match self {
            LogLevel::Log => Color::Default,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error | LogLevel::Debug => Color::Red,
            LogLevel::Info => Color::Blue,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = PrintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" => Ok(LogLevel::Log),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(PrintError::InvalidLogLevel(s.to_string())),
        }
    }
}

/// The fixed set of console output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Log,
    Info,
    Warn,
    Error,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Log => "log",
            Channel::Info => "info",
            Channel::Warn => "warn",
            Channel::Error => "error",
        }
    }

    /// Whether this channel goes to stderr on a terminal
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Channel::Warn | Channel::Error)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
