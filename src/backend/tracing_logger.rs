//! `StructuredLogger` backed by the `tracing` crate.

use std::error::Error as StdError;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::backend::template::bind;
use crate::backend::{EventLevel, StructuredLogger};

/// Emits one `tracing` event. The level must be a constant, hence the macro.
macro_rules! emit {
    ($level:expr, $severity:expr, $template:expr, $properties:expr, $error:expr, $text:expr) => {
        match $error {
            Some(error) => tracing::event!(
                $level,
                severity = $severity,
                template = $template,
                properties = %$properties,
                error = error,
                "{}",
                $text
            ),
            None => tracing::event!(
                $level,
                severity = $severity,
                template = $template,
                properties = %$properties,
                "{}",
                $text
            ),
        }
    };
}

/// Structured logger that writes through the current `tracing` dispatcher.
///
/// Each write binds the template to its arguments and emits an event with:
/// - `severity`: the `EventLevel` name (distinguishes `Fatal` from `Error`)
/// - `template`: the unrendered template
/// - `properties`: a JSON object of context values and bound holes
/// - `error`: the attached error, when there is one
///
/// The rendered template is the event message.
///
/// # Example
///
/// ```
/// use bus_log_adapter::backend::{EventLevel, StructuredLogger, TracingLogger};
/// use serde_json::json;
///
/// // Assumes a tracing subscriber is installed; without one this is a no-op.
/// let logger = TracingLogger::new().for_context("name", json!("orders"));
/// logger.write(EventLevel::Information, "{Count} messages", &[json!(3)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    context: Arc<Map<String, Value>>,
}

impl TracingLogger {
    /// Create a logger with no context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context attached to every event this logger writes.
    pub fn context(&self) -> &Map<String, Value> {
        &self.context
    }

    /// Rendered text and properties for a write, or `None` when `level` is
    /// disabled and nothing should be built.
    fn render(&self, level: EventLevel, template: &str, args: &[Value]) -> Option<(String, Value)> {
        if !self.is_enabled(level) {
            return None;
        }
        let bound = bind(template, args);
        let mut properties = (*self.context).clone();
        properties.extend(bound.properties);
        Some((bound.text, Value::Object(properties)))
    }

    fn emit(
        &self,
        level: EventLevel,
        error: Option<&(dyn StdError + 'static)>,
        template: &str,
        args: &[Value],
    ) {
        let Some((text, properties)) = self.render(level, template, args) else {
            return;
        };
        let severity = level.as_str();

        match level {
            EventLevel::Verbose => {
                emit!(tracing::Level::TRACE, severity, template, properties, error, text)
            }
            EventLevel::Debug => {
                emit!(tracing::Level::DEBUG, severity, template, properties, error, text)
            }
            EventLevel::Information => {
                emit!(tracing::Level::INFO, severity, template, properties, error, text)
            }
            EventLevel::Warning => {
                emit!(tracing::Level::WARN, severity, template, properties, error, text)
            }
            EventLevel::Error | EventLevel::Fatal => {
                emit!(tracing::Level::ERROR, severity, template, properties, error, text)
            }
        }
    }
}

impl StructuredLogger for TracingLogger {
    fn write(&self, level: EventLevel, template: &str, args: &[Value]) {
        self.emit(level, None, template, args);
    }

    fn write_error(
        &self,
        level: EventLevel,
        error: &(dyn StdError + 'static),
        template: &str,
        args: &[Value],
    ) {
        self.emit(level, Some(error), template, args);
    }

    fn is_enabled(&self, level: EventLevel) -> bool {
        match level {
            EventLevel::Verbose => tracing::enabled!(tracing::Level::TRACE),
            EventLevel::Debug => tracing::enabled!(tracing::Level::DEBUG),
            EventLevel::Information => tracing::enabled!(tracing::Level::INFO),
            EventLevel::Warning => tracing::enabled!(tracing::Level::WARN),
            EventLevel::Error | EventLevel::Fatal => tracing::enabled!(tracing::Level::ERROR),
        }
    }

    fn for_context(&self, key: &str, value: Value) -> Arc<dyn StructuredLogger> {
        let mut context = (*self.context).clone();
        context.insert(key.to_string(), value);
        Arc::new(TracingLogger {
            context: Arc::new(context),
        })
    }
}
