//! Named colors accepted by the `color` option

use super::error::PrintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Default,
    Blue,
    Green,
    Red,
    Yellow,
    Cyan,
    Magenta,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
        }
    }

    /// Terminal color, `None` for the terminal's own default
    pub fn terminal_color(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            Color::Default => None,
            Color::Blue => Some(Blue),
            Color::Green => Some(Green),
            Color::Red => Some(Red),
            Color::Yellow => Some(Yellow),
            Color::Cyan => Some(Cyan),
            Color::Magenta => Some(Magenta),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = PrintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Color::Default),
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            "red" => Ok(Color::Red),
            "yellow" => Ok(Color::Yellow),
            "cyan" => Ok(Color::Cyan),
            "magenta" => Ok(Color::Magenta),
            _ => Err(PrintError::InvalidColor(s.to_string())),
        }
    }
}
