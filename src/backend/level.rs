//! Backend event levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a structured log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventLevel {
    Verbose,
    Debug,
    Information,
    Warning,
    Error,
    Fatal,
}

impl EventLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventLevel::Verbose => "Verbose",
            EventLevel::Debug => "Debug",
            EventLevel::Information => "Information",
            EventLevel::Warning => "Warning",
            EventLevel::Error => "Error",
            EventLevel::Fatal => "Fatal",
        }
    }

    /// The `tracing` level events at this severity are emitted at.
    ///
    /// `tracing` has no level above `ERROR`, so `Fatal` shares it.
    pub fn as_tracing(&self) -> tracing::Level {
        match self {
            EventLevel::Verbose => tracing::Level::TRACE,
            EventLevel::Debug => tracing::Level::DEBUG,
            EventLevel::Information => tracing::Level::INFO,
            EventLevel::Warning => tracing::Level::WARN,
            EventLevel::Error | EventLevel::Fatal => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
