//! Console trait for output channels

use super::color::Color;
use super::error::Result;
use super::log_level::Channel;
use serde_json::Value;

/// One formatted print call, ready for a console channel
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleRecord {
    pub channel: Channel,
    /// Space-joined prefix segments, possibly empty
    pub prefix: String,
    /// CSS-like style string applying to the prefix template
    pub style: String,
    pub color: Color,
    pub messages: Vec<Value>,
}

impl ConsoleRecord {
    /// Style-templated first argument: `%c` followed by the prefix
    pub fn template(&self) -> String {
        format!("%c{}", self.prefix)
    }

    /// Messages as console text: strings verbatim, everything else as JSON
    pub fn render_messages(&self) -> String {
        self.messages
            .iter()
            .map(|message| match message {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Prefix and messages on one line, without styling
    pub fn render_plain(&self) -> String {
        let messages = self.render_messages();
        match (self.prefix.is_empty(), messages.is_empty()) {
            (true, _) => messages,
            (false, true) => self.prefix.clone(),
            (false, false) => format!("{} {}", self.prefix, messages),
        }
    }
}

pub trait Console: Send + Sync {
    fn write(&self, record: &ConsoleRecord) -> Result<()>;
    fn name(&self) -> &str;
}
