//! Cache-backed `LogFactory` that hands out `BackendLog`s.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::adapter::cache::LogCache;
use crate::adapter::log::BackendLog;
use crate::backend::{default_logger, DefaultLogger, StructuredLogger};
use crate::facade::{Log, LogFactory};

/// Context key the logger name is attached under.
pub const DEFAULT_CONTEXT_KEY: &str = "name";

/// Where the factory takes its base logger from.
enum BaseLogger {
    /// A logger supplied at construction.
    Fixed(Arc<dyn StructuredLogger>),
    /// Whatever the slot holds at lookup time.
    Default(Arc<DefaultLogger>),
}

/// A handle together with the base logger it was derived from.
#[derive(Clone)]
struct CachedLog {
    base: Arc<dyn StructuredLogger>,
    log: Arc<BackendLog>,
}

/// Hands out one `BackendLog` per name, each bound to the base logger
/// enriched with the name.
pub struct BackendLogFactory {
    base: BaseLogger,
    context_key: String,
    logs: LogCache<CachedLog>,
}

impl BackendLogFactory {
    /// Use `base`, or the process default logger when `None`.
    pub fn new(base: Option<Arc<dyn StructuredLogger>>) -> Self {
        Self::with_default(base, default_logger())
    }

    /// Use `base`, or whatever `fallback` holds at lookup time when `None`.
    pub fn with_default(base: Option<Arc<dyn StructuredLogger>>, fallback: Arc<DefaultLogger>) -> Self {
        let base = match base {
            Some(logger) => BaseLogger::Fixed(logger),
            None => BaseLogger::Default(fallback),
        };
        Self {
            base,
            context_key: DEFAULT_CONTEXT_KEY.to_string(),
            logs: LogCache::new(),
        }
    }

    /// Attach the logger name under `key` instead of `"name"`.
    pub fn context_key(mut self, key: impl Into<String>) -> Self {
        self.context_key = key.into();
        self
    }

    /// Number of names handed out so far.
    pub fn cached(&self) -> usize {
        self.logs.len()
    }

    fn resolve_base(&self) -> Arc<dyn StructuredLogger> {
        match &self.base {
            BaseLogger::Fixed(logger) => Arc::clone(logger),
            BaseLogger::Default(slot) => slot.current(),
        }
    }
}

impl LogFactory for BackendLogFactory {
    fn get(&self, name: &str) -> Arc<dyn Log> {
        let base = self.resolve_base();
        let cached = self.logs.get_or_replace_with(
            name,
            |cached| std::ptr::addr_eq(Arc::as_ptr(&cached.base), Arc::as_ptr(&base)),
            || {
                tracing::debug!(name, key = %self.context_key, "creating bus log");
                let enriched = base.for_context(&self.context_key, Value::String(name.to_string()));
                CachedLog {
                    base: Arc::clone(&base),
                    log: Arc::new(BackendLog::new(enriched)),
                }
            },
        );
        cached.log
    }
}

impl fmt::Debug for BackendLogFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = match self.base {
            BaseLogger::Fixed(_) => "fixed",
            BaseLogger::Default(_) => "default",
        };
        f.debug_struct("BackendLogFactory")
            .field("base", &base)
            .field("context_key", &self.context_key)
            .field("cached", &self.logs.len())
            .finish()
    }
}
