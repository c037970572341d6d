//! Stack capture, parsing and rendering

use super::caller::CallerInfo;
use std::backtrace::Backtrace;

const THIS_MODULE: &str = module_path!();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub function: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl StackFrame {
    fn new(function: &str) -> Self {
        Self {
            function: function.to_string(),
            file: None,
            line: None,
            column: None,
        }
    }

    /// A frame with a resolved source location
    pub fn is_call_site(&self) -> bool {
        self.file.is_some() && self.line.is_some()
    }

    /// Frames of the backtrace machinery and of this module
    fn is_internal(&self) -> bool {
        self.function.starts_with("std::backtrace")
            || self.function.starts_with("<std::backtrace")
            || self.function.contains(THIS_MODULE)
    }

    pub fn caller_info(&self) -> CallerInfo {
        CallerInfo::from_parts(
            self.file.as_deref(),
            self.line,
            self.column,
            Some(&self.function),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct StackTrace {
    frames: Vec<StackFrame>,
}

impl StackTrace {
    /// Capture the current stack, regardless of `RUST_BACKTRACE`
    pub fn capture() -> Self {
        Self::parse(&Backtrace::force_capture().to_string())
    }

    /// Parse the textual form of a backtrace:
    ///
    /// ```text
    ///    3: app::handlers::create
    ///              at ./src/handlers.rs:42:9
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut frames: Vec<StackFrame> = Vec::new();

        for line in text.lines() {
            let trimmed = line.trim();
            if let Some(location) = trimmed.strip_prefix("at ") {
                if let Some(frame) = frames.last_mut().filter(|f| f.file.is_none()) {
                    let (file, line, column) = parse_location(location);
                    frame.file = Some(file.to_string());
                    frame.line = line;
                    frame.column = column;
                }
                continue;
            }

            if let Some((index, function)) = trimmed.split_once(": ") {
                if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
                    frames.push(StackFrame::new(function));
                }
            }
        }

        Self { frames }
    }

    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// Frames that look like real call sites, innermost first
    pub fn call_sites(&self) -> impl Iterator<Item = &StackFrame> {
        self.frames
            .iter()
            .filter(|frame| frame.is_call_site() && !frame.is_internal())
    }

    /// Numbered listing of the call-site frames
    pub fn render(&self) -> String {
        self.call_sites()
            .enumerate()
            .map(|(index, frame)| {
                format!(
                    "#{} 🔹 {} 📌 Line: {}, Col: {}",
                    index + 1,
                    frame.file.as_deref().unwrap_or("unknown"),
                    frame.line.unwrap_or(0),
                    frame.column.unwrap_or(0)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Split `path:line:column` (column optional) from the right
fn parse_location(location: &str) -> (&str, Option<u32>, Option<u32>) {
    let mut parts = location.rsplitn(3, ':');
    let last = parts.next().and_then(|s| s.parse::<u32>().ok());
    let middle = parts.next().and_then(|s| s.parse::<u32>().ok());

    match (last, middle, parts.next()) {
        (Some(column), Some(line), Some(file)) => (file, Some(line), Some(column)),
        _ => match location.rsplit_once(':') {
            Some((file, line)) if line.parse::<u32>().is_ok() => (file, line.parse().ok(), None),
            _ => (location, None, None),
        },
    }
}

/// Caller information for the frame `skip` levels above the caller of this
/// function. A stack shallower than that yields [`CallerInfo::unknown`].
pub fn inspect(skip: usize) -> CallerInfo {
    StackTrace::capture()
        .call_sites()
        .nth(skip)
        .map(StackFrame::caller_info)
        .unwrap_or_else(CallerInfo::unknown)
}
