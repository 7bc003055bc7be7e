//! Persistent store
//!
//! [`PersistentStore`] binds one convertible type's slot to a shared
//! [`StorageBackend`] handle. It owns no state of its own beyond the key
//! captured at construction; get/set/remove delegate straight to the
//! facility, so data lives as long as the facility does.

use crate::backend::StorageBackend;
use std::sync::Arc;
use tracing::trace;
use typedstore_core::{Convertible, Store};

/// Store over a shared persistence facility.
///
/// The backend handle is passed in explicitly, never pulled from a global;
/// stores for different convertible types can share one handle and address
/// disjoint keys in it.
///
/// ## Example
///
/// ```ignore
/// let backend = Arc::new(FileBackend::open("defaults.json")?);
/// let config = PersistentStore::<CameraConfig, _>::new(Arc::clone(&backend));
/// let volume = PersistentStore::<Volume, _>::new(backend);
/// ```
#[derive(Debug)]
pub struct PersistentStore<C: Convertible, B: StorageBackend> {
    key: String,
    backend: Arc<B>,
    _marker: std::marker::PhantomData<fn() -> C>,
}

impl<C: Convertible, B: StorageBackend> PersistentStore<C, B> {
    /// Bind `C`'s slot to `backend`.
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            key: C::key(),
            backend,
            _marker: std::marker::PhantomData,
        }
    }

    /// The facility this store delegates to.
    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }
}

impl<C: Convertible, B: StorageBackend> Store for PersistentStore<C, B> {
    type Item = C;

    fn key(&self) -> &str {
        &self.key
    }

    fn set(&self, value: &C) {
        trace!(key = %self.key, "set");
        self.backend.set_value(&self.key, value.to_transport());
    }

    fn get(&self) -> Option<C> {
        self.backend
            .get_value(&self.key)
            .and_then(|v| C::from_transport(&v))
    }

    fn remove(&self) {
        trace!(key = %self.key, "remove");
        self.backend.remove_value(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use typedstore_core::Value;

    #[derive(Debug, Clone, PartialEq)]
    struct Nickname(String);

    impl Convertible for Nickname {
        fn key() -> String {
            "tests.Nickname".to_string()
        }

        fn to_transport(&self) -> Value {
            Value::String(self.0.clone())
        }

        fn from_transport(value: &Value) -> Option<Self> {
            value.as_str().map(|s| Nickname(s.to_string()))
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Attempts(i64);

    impl Convertible for Attempts {
        fn key() -> String {
            "tests.Attempts".to_string()
        }

        fn to_transport(&self) -> Value {
            Value::Int(self.0)
        }

        fn from_transport(value: &Value) -> Option<Self> {
            value.as_int().map(Attempts)
        }
    }

    #[test]
    fn delegates_to_the_backend_under_the_type_key() {
        let backend = Arc::new(MemoryBackend::new());
        let store = PersistentStore::<Nickname, _>::new(Arc::clone(&backend));

        store.set(&Nickname("ada".to_string()));
        assert_eq!(
            backend.get_value("tests.Nickname"),
            Some(Value::String("ada".to_string()))
        );
        assert_eq!(store.get(), Some(Nickname("ada".to_string())));

        store.remove();
        assert_eq!(backend.get_value("tests.Nickname"), None);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn stores_of_different_types_share_one_backend() {
        let backend = Arc::new(MemoryBackend::new());
        let names = PersistentStore::<Nickname, _>::new(Arc::clone(&backend));
        let attempts = PersistentStore::<Attempts, _>::new(backend);

        names.set(&Nickname("ada".to_string()));
        attempts.set(&Attempts(3));

        names.remove();
        assert_eq!(names.get(), None);
        assert_eq!(attempts.get(), Some(Attempts(3)));
    }

    #[test]
    fn malformed_stored_value_reads_as_none() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set_value("tests.Attempts", Value::String("three".to_string()));

        let store = PersistentStore::<Attempts, _>::new(backend);
        assert_eq!(store.get(), None);
    }
}
