//! Error types for the print system

pub type Result<T> = std::result::Result<T, PrintError>;

#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    /// Console channel write failure
    #[error("Console write failed on {channel} channel: {source}")]
    ConsoleWrite {
        channel: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration text that is not valid JSON for its target
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unknown environment name
    #[error("Invalid environment: '{0}'")]
    InvalidEnvironment(String),

    /// Unknown log level name
    #[error("Invalid log level: '{0}'")]
    InvalidLogLevel(String),

    /// Unknown color name
    #[error("Invalid color: '{0}'")]
    InvalidColor(String),
}

impl PrintError {
    /// Create a console write error for the named channel
    pub fn console_write(channel: impl Into<String>, source: std::io::Error) -> Self {
        PrintError::ConsoleWrite {
            channel: channel.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrintError::InvalidEnvironment("qa".to_string());
        assert_eq!(err.to_string(), "Invalid environment: 'qa'");

        let err = PrintError::InvalidLogLevel("fatal".to_string());
        assert_eq!(err.to_string(), "Invalid log level: 'fatal'");
    }

    #[test]
    fn test_console_write_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = PrintError::console_write("warn", io_err);

        assert!(matches!(err, PrintError::ConsoleWrite { .. }));
        assert!(err.to_string().contains("warn channel"));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PrintError = json_err.into();
        assert!(matches!(err, PrintError::JsonError(_)));
    }
}
