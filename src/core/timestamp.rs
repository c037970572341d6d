//! Timestamp formatting for the `[timestamp]` prefix
//!
//! Timestamps are rendered in local time. The default mirrors a locale time
//! string (`14:03:27`); the other variants suit output that is later grepped
//! or correlated with other logs.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Rendered in place of a timestamp whose custom format cannot be applied
pub const INVALID_TIMESTAMP_FORMAT: &str = "invalid timestamp format";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use console_print::TimestampFormat;
/// use chrono::Local;
///
/// let format = TimestampFormat::TimeOfDay;
/// let rendered = format.format(&Local::now());
/// assert_eq!(rendered.len(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local time of day: `14:03:27`
    #[default]
    TimeOfDay,

    /// Local time of day with milliseconds: `14:03:27.512`
    TimeOfDayMillis,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736328645`
    Unix,

    /// Unix timestamp in milliseconds: `1736328645123`
    UnixMillis,

    /// Custom strftime format. A format chrono cannot apply renders as
    /// [`INVALID_TIMESTAMP_FORMAT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use console_print::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y %H:%M".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match self {
            TimestampFormat::TimeOfDay => datetime.format("%H:%M:%S").to_string(),
            TimestampFormat::TimeOfDayMillis => datetime.format("%H:%M:%S%.3f").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut rendered = String::new();
                match write!(rendered, "{}", datetime.format(format_str)) {
                    Ok(()) => rendered,
                    Err(_) => INVALID_TIMESTAMP_FORMAT.to_string(),
                }
            }
        }
    }

    /// Render the current local time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}
