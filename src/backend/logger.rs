//! The structured logger interface and the process default slot.

use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use serde_json::Value;

use crate::backend::{EventLevel, TracingLogger};

/// A structured, leveled logger that renders message templates.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one instance is shared by every
/// handle derived from it.
pub trait StructuredLogger: Send + Sync {
    /// Write an event built from `template` and its positional `args`.
    fn write(&self, level: EventLevel, template: &str, args: &[Value]);

    /// Write an event carrying `error`.
    fn write_error(
        &self,
        level: EventLevel,
        error: &(dyn StdError + 'static),
        template: &str,
        args: &[Value],
    );

    /// Whether an event at `level` would be emitted.
    fn is_enabled(&self, level: EventLevel) -> bool;

    /// A logger that attaches `key = value` to every event it writes, in
    /// addition to this logger's own context.
    fn for_context(&self, key: &str, value: Value) -> Arc<dyn StructuredLogger>;
}

/// Swappable holder for the logger used when none is passed explicitly.
///
/// Readers resolve it at use time, so a logger configured after the adapter
/// was installed is still picked up.
pub struct DefaultLogger {
    current: ArcSwap<Arc<dyn StructuredLogger>>,
}

impl DefaultLogger {
    pub fn new(logger: Arc<dyn StructuredLogger>) -> Self {
        Self {
            current: ArcSwap::from_pointee(logger),
        }
    }

    /// The logger in the slot right now.
    pub fn current(&self) -> Arc<dyn StructuredLogger> {
        Arc::clone(&**self.current.load())
    }

    /// Put `logger` in the slot.
    pub fn replace(&self, logger: Arc<dyn StructuredLogger>) {
        self.current.store(Arc::new(logger));
        tracing::debug!("default structured logger replaced");
    }
}

impl fmt::Debug for DefaultLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultLogger").finish_non_exhaustive()
    }
}

/// The process-wide default slot, initially a context-free `TracingLogger`.
pub fn default_logger() -> Arc<DefaultLogger> {
    static DEFAULT: OnceLock<Arc<DefaultLogger>> = OnceLock::new();
    let slot = DEFAULT.get_or_init(|| {
        let logger: Arc<dyn StructuredLogger> = Arc::new(TracingLogger::new());
        Arc::new(DefaultLogger::new(logger))
    });
    Arc::clone(slot)
}
