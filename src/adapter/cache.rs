//! Per-name log cache.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

/// A thread-safe map from logger name to a lazily built value.
///
/// Entries are never evicted. Lookups that miss build the value outside the
/// map's lock, so two threads missing on the same name at the same time may
/// both build one; the later insert wins and the other value is dropped.
#[derive(Clone)]
pub struct LogCache<V> {
    inner: Arc<DashMap<String, V>>,
}

impl<V: Clone> LogCache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// The value stored for `name`, if any.
    pub fn get(&self, name: &str) -> Option<V> {
        self.inner.get(name).map(|r| r.value().clone())
    }

    /// Return the value for `name`, building it with `supplier` on a miss.
    pub fn get_or_insert_with<F>(&self, name: &str, supplier: F) -> V
    where
        F: FnOnce() -> V,
    {
        self.get_or_replace_with(name, |_| true, supplier)
    }

    /// Like `get_or_insert_with`, but a stored value for which `is_current`
    /// returns false is rebuilt and replaced.
    pub fn get_or_replace_with<P, F>(&self, name: &str, is_current: P, supplier: F) -> V
    where
        P: Fn(&V) -> bool,
        F: FnOnce() -> V,
    {
        if let Some(existing) = self.get(name) {
            if is_current(&existing) {
                return existing;
            }
        }

        let value = supplier();
        self.inner.insert(name.to_string(), value.clone());
        value
    }

    /// Number of cached names.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Cached names, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.inner.iter().map(|r| r.key().clone()).collect()
    }
}

impl<V: Clone> Default for LogCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for LogCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogCache")
            .field("len", &self.inner.len())
            .finish()
    }
}
