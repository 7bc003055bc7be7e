//! Persistence facility interface
//!
//! [`PersistentStore`](crate::PersistentStore) does not talk to a medium
//! directly; it talks to a [`StorageBackend`] handle passed in at
//! construction. That keeps the facility swappable: a durable file
//! ([`FileBackend`](crate::FileBackend)) in production, a plain map
//! ([`MemoryBackend`]) in tests.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use typedstore_core::{Result, Value};

/// Key-value facility consumed by [`PersistentStore`](crate::PersistentStore).
///
/// Operations are keyed by flat strings and carry transport values only.
/// Mutation is infallible at this interface; media that can fail surface
/// errors through [`flush`](StorageBackend::flush) and their own open paths.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get_value(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set_value(&self, key: &str, value: Value);

    /// Remove the value under `key`. Idempotent.
    fn remove_value(&self, key: &str);

    /// Push pending writes to the backing medium.
    ///
    /// No-op for purely in-memory backends.
    fn flush(&self) -> Result<()>;
}

/// Process-local dictionary backend.
///
/// Backs [`PersistentStore`](crate::PersistentStore) with a plain map whose
/// lifetime is bound to the backend instance. Doubles as the test stand-in
/// for [`FileBackend`](crate::FileBackend).
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<FxHashMap<String, Value>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_value(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    fn set_value(&self, key: &str, value: Value) {
        self.entries.write().insert(key.to_string(), value);
    }

    fn remove_value(&self, key: &str) {
        self.entries.write().remove(key);
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
