//! Terminal console writing to stdout and stderr

use crate::core::{Color, Console, ConsoleRecord, PrintError, Result};
use colored::{ColoredString, Colorize};
use std::io::Write;

pub struct StdConsole {
    use_colors: bool,
}

impl StdConsole {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Render a record as one terminal line
    pub fn format_line(&self, record: &ConsoleRecord) -> String {
        let line = record.render_plain();
        if self.use_colors {
            TerminalStyle::for_record(record).apply(&line)
        } else {
            line
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn write(&self, record: &ConsoleRecord) -> Result<()> {
        let line = self.format_line(record);

        // Warn and Error go to stderr, Log and Info to stdout
        let result = if record.channel.is_diagnostic() {
            writeln!(std::io::stderr().lock(), "{}", line)
        } else {
            writeln!(std::io::stdout().lock(), "{}", line)
        };

        result.map_err(|e| PrintError::console_write(record.channel.as_str(), e))
    }

    fn name(&self) -> &str {
        "stdio"
    }
}

/// The subset of a CSS-like style string a terminal can show
#[derive(Debug, Default, PartialEq, Eq)]
struct TerminalStyle {
    foreground: Option<colored::Color>,
    background: Option<colored::Color>,
    bold: bool,
    italic: bool,
    underline: bool,
    strikethrough: bool,
}

impl TerminalStyle {
    /// Style declarations of the record, with its resolved color as foreground
    fn for_record(record: &ConsoleRecord) -> Self {
        let mut style = Self::parse(&record.style);
        if let Some(color) = record.color.terminal_color() {
            style.foreground = Some(color);
        }
        style
    }

    /// Unknown properties and malformed declarations are skipped.
    fn parse(style: &str) -> Self {
        let mut parsed = Self::default();

        for declaration in style.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let value = value.trim().to_lowercase();

            match property.trim().to_lowercase().as_str() {
                "color" => parsed.foreground = terminal_color(&value),
                "background" | "background-color" => parsed.background = terminal_color(&value),
                "font-weight" => {
                    parsed.bold = matches!(
                        value.as_str(),
                        "bold" | "bolder" | "600" | "700" | "800" | "900"
                    )
                }
                "font-style" => parsed.italic = matches!(value.as_str(), "italic" | "oblique"),
                "text-decoration" | "text-decoration-line" => {
                    parsed.underline = value.contains("underline");
                    parsed.strikethrough = value.contains("line-through");
                }
                _ => {}
            }
        }

        parsed
    }

    fn apply(&self, text: &str) -> String {
        if *self == Self::default() {
            return text.to_string();
        }

        let mut styled: ColoredString = text.normal();
        if let Some(color) = self.foreground {
            styled = styled.color(color);
        }
        if let Some(color) = self.background {
            styled = styled.on_color(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.italic {
            styled = styled.italic();
        }
        if self.underline {
            styled = styled.underline();
        }
        if self.strikethrough {
            styled = styled.strikethrough();
        }
        styled.to_string()
    }
}

fn terminal_color(value: &str) -> Option<colored::Color> {
    match value {
        "black" => Some(colored::Color::Black),
        "white" => Some(colored::Color::White),
        "gray" | "grey" => Some(colored::Color::BrightBlack),
        other => other.parse::<Color>().ok().and_then(|c| c.terminal_color()),
    }
}
