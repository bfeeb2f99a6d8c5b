//! `Log` implementation over a `StructuredLogger`.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::backend::{EventLevel, StructuredLogger};
use crate::error::Error;
use crate::facade::{Cause, Log, LogLevel, MessageProvider};

/// Template used for every call that logs a single object.
pub const OBJECT_TEMPLATE: &str = "{@obj}";

/// Map a facade level to the backend level it is written at.
///
/// `Off` is not a level records are written at; it falls back to
/// `Information` like any other level without a counterpart.
pub fn event_level(level: LogLevel) -> EventLevel {
    match level {
        LogLevel::Fatal => EventLevel::Fatal,
        LogLevel::Error => EventLevel::Error,
        LogLevel::Warn => EventLevel::Warning,
        LogLevel::Info => EventLevel::Information,
        LogLevel::Debug => EventLevel::Debug,
        LogLevel::All => EventLevel::Verbose,
        LogLevel::Off => EventLevel::Information,
    }
}

/// A facade log that forwards every call to one structured logger.
#[derive(Clone)]
pub struct BackendLog {
    logger: Arc<dyn StructuredLogger>,
}

impl BackendLog {
    pub fn new(logger: Arc<dyn StructuredLogger>) -> Self {
        Self { logger }
    }

    /// Build from an optional logger, failing when it is absent.
    pub fn try_new(logger: Option<Arc<dyn StructuredLogger>>) -> Result<Self, Error> {
        logger
            .map(Self::new)
            .ok_or(Error::MissingArgument("logger"))
    }

    /// The structured logger this log writes to.
    pub fn logger(&self) -> &Arc<dyn StructuredLogger> {
        &self.logger
    }
}

impl fmt::Debug for BackendLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendLog").finish_non_exhaustive()
    }
}

impl Log for BackendLog {
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.logger.is_enabled(event_level(level))
    }

    fn log(&self, level: LogLevel, obj: Value) {
        self.logger
            .write(event_level(level), OBJECT_TEMPLATE, &[obj]);
    }

    fn log_with_cause(&self, level: LogLevel, obj: Value, cause: Cause<'_>) {
        self.logger
            .write_error(event_level(level), cause, OBJECT_TEMPLATE, &[obj]);
    }

    fn log_lazy(&self, level: LogLevel, provider: MessageProvider<'_>) {
        let level = event_level(level);
        if self.logger.is_enabled(level) {
            self.logger.write(level, OBJECT_TEMPLATE, &[provider()]);
        }
    }

    fn log_format(&self, level: LogLevel, format: &str, args: &[Value]) {
        self.logger.write(event_level(level), format, args);
    }
}
