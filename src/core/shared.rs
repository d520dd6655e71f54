//! Thread-shared registry handle
//!
//! [`Registry`] itself has no internal synchronization. When one registry must
//! be reached from several threads, wrap it in a [`SharedRegistry`]: every
//! operation runs under a single exclusive lock.

use crate::error::Result;
use crate::record::Record;
use crate::registry::Registry;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to one registry behind one lock
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        SharedRegistry {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Run `f` with shared access to the registry
    pub fn with<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
        let guard = self.inner.lock();
        f(&*guard)
    }

    /// Run `f` with exclusive access to the registry
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    pub fn append(&self, record: Record) -> Result<()> {
        self.with_mut(|registry| registry.append(record))
    }

    pub fn len(&self) -> usize {
        self.with(Registry::len)
    }

    pub fn is_empty(&self) -> bool {
        self.with(Registry::is_empty)
    }

    /// Filter into a new, unshared registry
    pub fn filter(&self, spec: &str) -> Result<Registry> {
        self.with(|registry| registry.filter(spec))
    }

    /// Copy of the current registry contents
    pub fn snapshot(&self) -> Registry {
        self.with(Registry::clone)
    }
}
