//! Call-site capture and caller information
//!
//! The originating location is recorded where the call is made, either by
//! `#[track_caller]` on the facade methods or by the crate's macros, and
//! handed down explicitly. Nothing here depends on how many frames the
//! facade itself adds.

use std::fmt;
use std::panic::Location;

const UNKNOWN: &str = "unknown";

/// Location of a print call, captured at the call site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
    pub function: Option<&'static str>,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self {
            file,
            line,
            column,
            function: None,
        }
    }

    /// Location of whoever called the enclosing `#[track_caller]` function
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }

    #[must_use]
    pub fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }
}

/// Snapshot describing where a print call came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
    pub file_url: String,
    pub file_path: String,
    pub file_name: String,
    pub line_number: u32,
    pub column_number: u32,
    pub function_name: String,
}

impl CallerInfo {
    /// Sentinel used when no caller can be determined
    pub fn unknown() -> Self {
        Self {
            file_url: UNKNOWN.to_string(),
            file_path: UNKNOWN.to_string(),
            file_name: UNKNOWN.to_string(),
            line_number: 0,
            column_number: 0,
            function_name: UNKNOWN.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }

    pub fn from_site(site: &CallSite) -> Self {
        Self::from_parts(
            Some(site.file),
            Some(site.line),
            Some(site.column),
            site.function,
        )
    }

    /// Build from whatever pieces are available; gaps become `"unknown"`/0.
    pub fn from_parts(
        file: Option<&str>,
        line: Option<u32>,
        column: Option<u32>,
        function: Option<&str>,
    ) -> Self {
        let file_url = file.filter(|f| !f.is_empty()).unwrap_or(UNKNOWN);
        let segments: Vec<&str> = file_url
            .split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .collect();

        let file_name = segments
            .last()
            .copied()
            .map(|last| last.split('?').next().unwrap_or(last))
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN);
        let file_path = if segments.is_empty() {
            UNKNOWN.to_string()
        } else {
            segments[segments.len().saturating_sub(2)..].join("/")
        };

        Self {
            file_url: file_url.to_string(),
            file_path,
            file_name: file_name.to_string(),
            line_number: line.unwrap_or(0),
            column_number: column.unwrap_or(0),
            function_name: function
                .filter(|f| !f.is_empty())
                .unwrap_or(UNKNOWN)
                .to_string(),
        }
    }

    /// Bracketed prefix segment, `[main.rs:42]`
    pub fn prefix(&self) -> String {
        format!("[{}:{}]", self.file_name, self.line_number)
    }

    /// Multi-line block appended to debug output
    pub fn block(&self) -> String {
        format!(
            "\n***********************\n\
             📍 File URL: {}\n\
             📂 File path: {}\n\
             📜 File name: {}\n\
             🔧 Function name: {}\n\
             📌 Line number: {}\n\
             📍 Column number: {}\n\
             ***********************\n",
            self.file_url,
            self.file_path,
            self.file_name,
            self.function_name,
            self.line_number,
            self.column_number
        )
    }
}

impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path, self.line_number, self.column_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_site() {
        let site = CallSite::new("crates/app/src/handlers/user.rs", 42, 9)
            .with_function("app::handlers::user::create");
        let info = CallerInfo::from_site(&site);

        assert_eq!(info.file_url, "crates/app/src/handlers/user.rs");
        assert_eq!(info.file_path, "handlers/user.rs");
        assert_eq!(info.file_name, "user.rs");
        assert_eq!(info.line_number, 42);
        assert_eq!(info.column_number, 9);
        assert_eq!(info.function_name, "app::handlers::user::create");
        assert_eq!(info.prefix(), "[user.rs:42]");
    }

    #[test]
    fn test_query_string_stripped() {
        let info = CallerInfo::from_parts(
            Some("http://localhost:5173/src/App.tsx?t=1712"),
            Some(7),
            None,
            None,
        );
        assert_eq!(info.file_name, "App.tsx");
        assert_eq!(info.file_path, "src/App.tsx?t=1712");
        assert_eq!(info.column_number, 0);
        assert_eq!(info.function_name, "unknown");
    }

    #[test]
    fn test_windows_separators() {
        let info = CallerInfo::from_parts(Some(r"src\bin\tool.rs"), Some(1), Some(1), None);
        assert_eq!(info.file_name, "tool.rs");
        assert_eq!(info.file_path, "bin/tool.rs");
    }

    #[test]
    fn test_single_segment() {
        let info = CallerInfo::from_parts(Some("main.rs"), Some(3), Some(5), None);
        assert_eq!(info.file_name, "main.rs");
        assert_eq!(info.file_path, "main.rs");
    }

    #[test]
    fn test_missing_everything_is_sentinel() {
        let info = CallerInfo::from_parts(None, None, None, None);
        assert!(info.is_unknown());
    }

    #[test]
    fn test_track_caller_site() {
        #[track_caller]
        fn capture() -> CallSite {
            CallSite::caller()
        }

        let line = line!() + 1;
        let site = capture();
        assert_eq!(site.line, line);
        assert!(site.file.ends_with("caller.rs"));
    }

    #[test]
    fn test_block_contents() {
        let info = CallerInfo::from_parts(Some("src/lib.rs"), Some(10), Some(2), Some("run"));
        let block = info.block();
        assert!(block.contains("File name: lib.rs"));
        assert!(block.contains("Function name: run"));
        assert!(block.contains("Line number: 10"));
        assert!(block.contains("Column number: 2"));
    }
}
