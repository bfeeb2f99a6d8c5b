//! Facade log levels.

use std::fmt;

/// Level used by the bus logging facade.
///
/// `All` is the broadest level and `Off` disables output; both exist because
/// hosts configure thresholds with them, not because records are written at
/// them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Everything, including verbose diagnostics
    All,
    /// Debugging information
    Debug,
    /// General information
    #[default]
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
    /// Failures the host cannot recover from
    Fatal,
    /// No output
    Off,
}

impl LogLevel {
    /// Every facade level, broadest first.
    pub const ALL_LEVELS: [LogLevel; 7] = [
        LogLevel::All,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Off,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::All => "All",
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warn",
            LogLevel::Error => "Error",
            LogLevel::Fatal => "Fatal",
            LogLevel::Off => "Off",
        }
    }

    /// Parse a level name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<LogLevel> {
        let level = match name.trim().to_ascii_lowercase().as_str() {
            "all" => LogLevel::All,
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            "fatal" => LogLevel::Fatal,
            "off" | "none" => LogLevel::Off,
            _ => return None,
        };
        Some(level)
    }

    /// Parse a level name, falling back to `Info` for anything unrecognized.
    pub fn from_name_or_default(name: &str) -> LogLevel {
        Self::from_name(name).unwrap_or_default()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
