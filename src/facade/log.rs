//! The leveled logging contract the bus programs against.

use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;

use crate::facade::LogLevel;

/// Lazily produces the object to log.
///
/// Implementations only call the provider when the level is enabled, so
/// expensive message construction is skipped entirely otherwise.
pub type MessageProvider<'a> = &'a dyn Fn() -> Value;

/// An error attached to a log record.
pub type Cause<'a> = &'a (dyn StdError + 'static);

/// Culture or formatting hints supplied by the caller of a `*_format_in` method.
///
/// Accepted for interface compatibility; structured backends render
/// templates without consulting it.
pub trait FormatProvider: fmt::Debug + Send + Sync {
    /// Identifier of the formatting culture (e.g. `"en-US"`).
    fn name(&self) -> &str;
}

/// Culture-neutral formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvariantFormat;

impl FormatProvider for InvariantFormat {
    fn name(&self) -> &str {
        ""
    }
}

macro_rules! level_methods {
    (
        $level:expr,
        $name:literal,
        $is_enabled:ident,
        $plain:ident,
        $with_cause:ident,
        $lazy:ident,
        $format:ident,
        $format_in:ident
    ) => {
        #[doc = concat!("Whether ", $name, " records would currently be written.")]
        fn $is_enabled(&self) -> bool {
            self.is_enabled($level)
        }

        #[doc = concat!("Log an object at ", $name, " level.")]
        fn $plain(&self, obj: Value) {
            self.log($level, obj);
        }

        #[doc = concat!("Log an object and its cause at ", $name, " level.")]
        fn $with_cause(&self, obj: Value, cause: Cause<'_>) {
            self.log_with_cause($level, obj, cause);
        }

        #[doc = concat!("Log a lazily built object at ", $name, " level.")]
        fn $lazy(&self, provider: MessageProvider<'_>) {
            self.log_lazy($level, provider);
        }

        #[doc = concat!("Log a message template at ", $name, " level.")]
        fn $format(&self, format: &str, args: &[Value]) {
            self.log_format($level, format, args);
        }

        #[doc = concat!("Log a message template at ", $name, " level with a format provider.")]
        fn $format_in(&self, provider: &dyn FormatProvider, format: &str, args: &[Value]) {
            self.log_format_in($level, provider, format, args);
        }
    };
}

/// Logging interface handed out to bus components.
///
/// Implementors provide the level-parameterized methods; the per-level
/// convenience methods (`info`, `warn_lazy`, `error_format`, ...) delegate to
/// them.
///
/// # Example
///
/// ```
/// use bus_log_adapter::facade::{Log, NoOpLog};
/// use serde_json::json;
///
/// let log = NoOpLog;
/// log.info(json!("consumer started"));
/// log.debug_lazy(&|| json!({ "queue": "orders", "depth": 12 }));
/// log.warn_format("retrying {MessageId} after {Attempts} attempts", &[json!("m-1"), json!(3)]);
/// ```
pub trait Log: Send + Sync {
    /// Whether records at `level` would currently be written.
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Log an object at `level`.
    fn log(&self, level: LogLevel, obj: Value);

    /// Log an object at `level` with an attached cause.
    fn log_with_cause(&self, level: LogLevel, obj: Value, cause: Cause<'_>);

    /// Log the object produced by `provider`, calling it only when `level`
    /// is enabled.
    fn log_lazy(&self, level: LogLevel, provider: MessageProvider<'_>);

    /// Log a message template with positional arguments.
    fn log_format(&self, level: LogLevel, format: &str, args: &[Value]);

    /// Log a message template with positional arguments and a format provider.
    fn log_format_in(
        &self,
        level: LogLevel,
        _provider: &dyn FormatProvider,
        format: &str,
        args: &[Value],
    ) {
        self.log_format(level, format, args);
    }

    level_methods!(LogLevel::Debug, "Debug", is_debug_enabled, debug, debug_with_cause, debug_lazy, debug_format, debug_format_in);
    level_methods!(LogLevel::Info, "Info", is_info_enabled, info, info_with_cause, info_lazy, info_format, info_format_in);
    level_methods!(LogLevel::Warn, "Warn", is_warn_enabled, warn, warn_with_cause, warn_lazy, warn_format, warn_format_in);
    level_methods!(LogLevel::Error, "Error", is_error_enabled, error, error_with_cause, error_lazy, error_format, error_format_in);
    level_methods!(LogLevel::Fatal, "Fatal", is_fatal_enabled, fatal, fatal_with_cause, fatal_lazy, fatal_format, fatal_format_in);
}

/// A log that discards everything and reports every level as disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLog;

impl Log for NoOpLog {
    #[inline]
    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }

    #[inline]
    fn log(&self, _level: LogLevel, _obj: Value) {}

    #[inline]
    fn log_with_cause(&self, _level: LogLevel, _obj: Value, _cause: Cause<'_>) {}

    #[inline]
    fn log_lazy(&self, _level: LogLevel, _provider: MessageProvider<'_>) {}

    #[inline]
    fn log_format(&self, _level: LogLevel, _format: &str, _args: &[Value]) {}
}
