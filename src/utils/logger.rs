#[cfg(feature = "cli")]
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Debug,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Errors are always shown, everything else only with `--verbose`.
    fn always_shown(self) -> bool {
        matches!(self, LogLevel::Error)
    }
}

/// Diagnostics printer. Writes to stderr only, stdout is reserved for the result.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn with_verbose(verbose: bool) -> Self {
        Logger { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.verbose || level.always_shown()
    }

    pub fn log_message(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        eprintln!(
            "{} {} {}",
            self.tool_signature(),
            self.format_status(level),
            message
        );
    }

    #[cfg(feature = "cli")]
    fn tool_signature(&self) -> String {
        format!(
            "{grey}[{accent}{bold}NextTag{reset}{grey}]{clear}",
            grey = SetForegroundColor(Color::Grey),
            accent = SetForegroundColor(Color::Rgb {
                r: 29,
                g: 211,
                b: 176,
            }),
            bold = SetAttribute(Attribute::Bold),
            reset = SetAttribute(Attribute::Reset),
            clear = ResetColor,
        )
    }

    #[cfg(not(feature = "cli"))]
    fn tool_signature(&self) -> String {
        "[NextTag]".to_string()
    }

    #[cfg(feature = "cli")]
    fn format_status(&self, level: LogLevel) -> String {
        let color = match level {
            LogLevel::Success => Color::Rgb {
                r: 76,
                g: 175,
                b: 80,
            },
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Info => Color::Rgb {
                r: 33,
                g: 150,
                b: 243,
            },
            LogLevel::Debug => Color::Rgb {
                r: 103,
                g: 58,
                b: 183,
            },
        };

        format!(
            "[{}{}{}{}]{}",
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold),
            level.label(),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }

    #[cfg(not(feature = "cli"))]
    fn format_status(&self, level: LogLevel) -> String {
        format!("[{}]", level.label())
    }
}
