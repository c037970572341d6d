//! Debug formatting
//!
//! Same pipeline as [`Formatter::format`], plus a prefix message, a
//! context-data block, an optional stack trace and, on the fallback channel,
//! a caller-information block. Debug output defaults to red.

use super::{
    caller::{CallSite, CallerInfo},
    color::Color,
    config::PrintConfig,
    console::ConsoleRecord,
    formatter::Formatter,
    log_level::{Channel, LogLevel},
    options::ContextData,
    stack::StackTrace,
};
use serde_json::Value;

impl Formatter {
    pub fn format_debug(&self, messages: Vec<Value>, config: PrintConfig, site: CallSite) {
        let environment = config.environment.unwrap_or_default();
        if self.is_gated(environment) {
            return;
        }

        let level = config.log_level.unwrap_or(LogLevel::Debug);
        let options = config.options.resolve(Color::Red);
        let style = options.style_string();

        let mut prefixes = self.common_prefixes(&options, environment, level);
        if let Some(ref prefix_message) = options.prefix_message {
            prefixes.push(format!("[🔔 {}]", prefix_message));
        }

        if !options.accepts(&messages) {
            self.metrics().record_suppressed_by_condition();
            return;
        }

        let mut messages = messages;
        if let Some(ref data) = options.context_data {
            messages.push(Value::String(context_block(data)));
        }
        if options.show_stack_trace {
            messages.push(Value::String(stack_block(&StackTrace::capture())));
        }

        let channel = match level.channel() {
            Some(channel) => channel,
            None => {
                if options.show_caller_info {
                    messages.push(Value::String(CallerInfo::from_site(&site).block()));
                }
                Channel::Log
            }
        };

        self.dispatch(ConsoleRecord {
            channel,
            prefix: prefixes.join(" "),
            style,
            color: options.color,
            messages,
        });
    }
}

fn context_block(data: &ContextData) -> String {
    format!("\n📄 Context Data:\n{}\n", data.render())
}

fn stack_block(trace: &StackTrace) -> String {
    format!("\n🛠️ Stack Trace:\n{}", trace.render())
}
