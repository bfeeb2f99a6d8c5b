//! Logger factories and the registration point that selects the active one.

use std::any::type_name;
use std::fmt;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use crate::facade::{Log, NoOpLog};

/// Hands out named logs.
pub trait LogFactory: Send + Sync {
    /// Get the log for a logical source name.
    fn get(&self, name: &str) -> Arc<dyn Log>;
}

/// Factory used until something else is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogFactory;

impl LogFactory for NoOpLogFactory {
    fn get(&self, _name: &str) -> Arc<dyn Log> {
        Arc::new(NoOpLog)
    }
}

/// Holds the active `LogFactory` for a bus.
///
/// The registry is an ordinary value: components receive the registry they
/// should log through. `global()` exists for the outermost wiring layer.
pub struct LogRegistry {
    active: ArcSwap<Box<dyn LogFactory>>,
}

impl LogRegistry {
    /// Create a registry with `NoOpLogFactory` active.
    pub fn new() -> Self {
        Self::with_factory(NoOpLogFactory)
    }

    /// Create a registry with `factory` active.
    pub fn with_factory<F: LogFactory + 'static>(factory: F) -> Self {
        let factory: Box<dyn LogFactory> = Box::new(factory);
        Self {
            active: ArcSwap::from_pointee(factory),
        }
    }

    /// Replace the active factory. Last writer wins.
    pub fn use_factory<F: LogFactory + 'static>(&self, factory: F) {
        let factory: Box<dyn LogFactory> = Box::new(factory);
        self.active.store(Arc::new(factory));
    }

    /// Get a log from the active factory.
    pub fn get(&self, name: &str) -> Arc<dyn Log> {
        self.active.load().get(name)
    }

    /// Get a log named after `T`'s type path.
    pub fn get_for<T: ?Sized>(&self) -> Arc<dyn Log> {
        self.get(type_name::<T>())
    }
}

impl Default for LogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRegistry").finish_non_exhaustive()
    }
}

/// The process-wide registry.
pub fn global() -> &'static LogRegistry {
    static GLOBAL: OnceLock<LogRegistry> = OnceLock::new();
    GLOBAL.get_or_init(LogRegistry::new)
}
