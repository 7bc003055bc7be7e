//! In-memory store
//!
//! The simplest backend: one slot in process memory, gone when the store is
//! dropped. Useful as working state and as the throwaway backend in tests.

use parking_lot::Mutex;
use typedstore_core::{Convertible, Store, Value};

/// Process-local single-slot store.
///
/// Holds the transport value for one convertible type behind a mutex, so the
/// store can be shared and still satisfy the `&self` contract. Lifetime of
/// the data is the lifetime of the instance.
#[derive(Debug)]
pub struct MemoryStore<C: Convertible> {
    key: String,
    slot: Mutex<Option<Value>>,
    _marker: std::marker::PhantomData<fn() -> C>,
}

impl<C: Convertible> MemoryStore<C> {
    /// Create an empty store for `C`'s slot.
    pub fn new() -> Self {
        Self {
            key: C::key(),
            slot: Mutex::new(None),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<C: Convertible> Default for MemoryStore<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Convertible> Store for MemoryStore<C> {
    type Item = C;

    fn key(&self) -> &str {
        &self.key
    }

    fn set(&self, value: &C) {
        *self.slot.lock() = Some(value.to_transport());
    }

    fn get(&self) -> Option<C> {
        self.slot.lock().as_ref().and_then(C::from_transport)
    }

    fn remove(&self) {
        *self.slot.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter(i64);

    impl Convertible for Counter {
        fn key() -> String {
            "tests.Counter".to_string()
        }

        fn to_transport(&self) -> Value {
            Value::Int(self.0)
        }

        fn from_transport(value: &Value) -> Option<Self> {
            value.as_int().map(Counter)
        }
    }

    #[test]
    fn get_before_set_is_none() {
        let store = MemoryStore::<Counter>::new();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn set_overwrites_and_get_reads_back() {
        let store = MemoryStore::<Counter>::new();
        store.set(&Counter(1));
        store.set(&Counter(2));
        assert_eq!(store.get(), Some(Counter(2)));
    }

    #[test]
    fn remove_clears_regardless_of_prior_state() {
        let store = MemoryStore::<Counter>::new();
        store.remove();
        assert_eq!(store.get(), None);

        store.set(&Counter(5));
        store.remove();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn key_comes_from_the_convertible_type() {
        let store = MemoryStore::<Counter>::new();
        assert_eq!(store.key(), "tests.Counter");
    }
}
