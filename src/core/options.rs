//! Format options and their layered merge
//!
//! Every field of [`FormatOptions`] is optional so a value can act as one
//! layer of configuration. Layers are merged field by field with
//! [`FormatOptions::layer`]; the upper layer wins wherever it sets a field.
//! [`FormatOptions::resolve`] fills the remaining gaps with built-in defaults.

use super::color::Color;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether a call prints, evaluated on its messages
#[derive(Clone)]
pub struct Condition(Arc<dyn Fn(&[Value]) -> bool + Send + Sync>);

impl Condition {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    #[inline]
    pub fn evaluate(&self, messages: &[Value]) -> bool {
        (self.0)(messages)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition(..)")
    }
}

/// Structured data attached to a debug call.
///
/// Conversion to JSON happens when the data is attached; a failure is kept
/// as `Invalid` and rendered inline instead of failing the call.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextData {
    Value(Value),
    Invalid(String),
}

impl ContextData {
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => ContextData::Value(value),
            Err(e) => ContextData::Invalid(e.to_string()),
        }
    }

    /// Human-readable rendering of the data
    pub fn render(&self) -> String {
        match self {
            ContextData::Value(value) => serde_json::to_string_pretty(value)
                .unwrap_or_else(|e| Self::invalid_placeholder(&e.to_string())),
            ContextData::Invalid(reason) => Self::invalid_placeholder(reason),
        }
    }

    fn invalid_placeholder(reason: &str) -> String {
        format!("⚠️ Invalid Context Data (Error: {})", reason)
    }
}

impl From<Value> for ContextData {
    fn from(value: Value) -> Self {
        ContextData::Value(value)
    }
}

impl<'de> Deserialize<'de> for ContextData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(ContextData::Value)
    }
}

/// One partial layer of formatting options
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub show_timestamp: Option<bool>,
    pub show_type: Option<bool>,
    pub show_environment_type: Option<bool>,
    pub show_caller_info: Option<bool>,
    pub show_stack_trace: Option<bool>,
    pub color: Option<Color>,
    pub styles: Option<String>,
    /// Extra prefix segment, debug output only
    pub prefix_message: Option<String>,
    /// Trailing data block, debug output only
    pub context_data: Option<ContextData>,
    #[serde(skip)]
    pub condition: Option<Condition>,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn show_timestamp(mut self, show: bool) -> Self {
        self.show_timestamp = Some(show);
        self
    }

    #[must_use]
    pub fn show_type(mut self, show: bool) -> Self {
        self.show_type = Some(show);
        self
    }

    #[must_use]
    pub fn show_environment_type(mut self, show: bool) -> Self {
        self.show_environment_type = Some(show);
        self
    }

    #[must_use]
    pub fn show_caller_info(mut self, show: bool) -> Self {
        self.show_caller_info = Some(show);
        self
    }

    #[must_use]
    pub fn show_stack_trace(mut self, show: bool) -> Self {
        self.show_stack_trace = Some(show);
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn styles(mut self, styles: impl Into<String>) -> Self {
        self.styles = Some(styles.into());
        self
    }

    #[must_use]
    pub fn prefix_message(mut self, message: impl Into<String>) -> Self {
        self.prefix_message = Some(message.into());
        self
    }

    /// Attach any serializable value as context data
    ///
    /// # Example
    ///
    /// ```
    /// use console_print::FormatOptions;
    /// use serde_json::json;
    ///
    /// let options = FormatOptions::new().context_data(&json!({ "user": 42 }));
    /// assert!(options.context_data.is_some());
    /// ```
    #[must_use]
    pub fn context_data<T: Serialize + ?Sized>(mut self, data: &T) -> Self {
        self.context_data = Some(ContextData::from_serialize(data));
        self
    }

    #[must_use]
    pub fn condition<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Condition::new(predicate));
        self
    }

    /// Merge `over` on top of `self`, field by field
    #[must_use]
    pub fn layer(&self, over: &FormatOptions) -> FormatOptions {
        FormatOptions {
            show_timestamp: over.show_timestamp.or(self.show_timestamp),
            show_type: over.show_type.or(self.show_type),
            show_environment_type: over.show_environment_type.or(self.show_environment_type),
            show_caller_info: over.show_caller_info.or(self.show_caller_info),
            show_stack_trace: over.show_stack_trace.or(self.show_stack_trace),
            color: over.color.or(self.color),
            styles: over.styles.clone().or_else(|| self.styles.clone()),
            prefix_message: over
                .prefix_message
                .clone()
                .or_else(|| self.prefix_message.clone()),
            context_data: over
                .context_data
                .clone()
                .or_else(|| self.context_data.clone()),
            condition: over.condition.clone().or_else(|| self.condition.clone()),
        }
    }

    /// Fill unset fields with built-in defaults
    pub fn resolve(&self, default_color: Color) -> ResolvedOptions {
        ResolvedOptions {
            show_timestamp: self.show_timestamp.unwrap_or(false),
            show_type: self.show_type.unwrap_or(false),
            show_environment_type: self.show_environment_type.unwrap_or(false),
            show_caller_info: self.show_caller_info.unwrap_or(false),
            show_stack_trace: self.show_stack_trace.unwrap_or(false),
            color: self.color.unwrap_or(default_color),
            styles: self.styles.clone().unwrap_or_default(),
            prefix_message: self.prefix_message.clone().filter(|m| !m.is_empty()),
            context_data: self.context_data.clone(),
            condition: self.condition.clone(),
        }
    }
}

/// Options with every default applied
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub show_timestamp: bool,
    pub show_type: bool,
    pub show_environment_type: bool,
    pub show_caller_info: bool,
    pub show_stack_trace: bool,
    pub color: Color,
    pub styles: String,
    pub prefix_message: Option<String>,
    pub context_data: Option<ContextData>,
    pub condition: Option<Condition>,
}

impl ResolvedOptions {
    /// Style string: user styles terminated by a single `;`, then the color
    pub fn style_string(&self) -> String {
        let mut style = self.styles.clone();
        if !style.is_empty() && !style.ends_with(';') {
            style.push(';');
        }
        if self.color != Color::Default {
            style.push_str(&format!("color: {};", self.color));
        }
        style
    }

    /// False when a condition is set and rejects the messages
    pub fn accepts(&self, messages: &[Value]) -> bool {
        self.condition
            .as_ref()
            .map_or(true, |condition| condition.evaluate(messages))
    }
}
