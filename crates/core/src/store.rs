//! Store contract and the type-erasing handle
//!
//! A store holds at most one transport value for one convertible type,
//! addressed by that type's key. The contract is three point operations with
//! no ordering or durability semantics beyond program order:
//!
//! - `set` overwrites the slot, no return
//! - `get` returns `None` if the slot was never set, was removed, or holds a
//!   value the type cannot rebuild from
//! - `remove` clears the slot and is idempotent
//!
//! [`AnyStore`] erases the concrete backend behind the same contract so call
//! sites can hold one handle while the backend is chosen elsewhere.

use crate::convert::Convertible;

/// Keyed get/set/remove over exactly one convertible type.
///
/// Methods take `&self`; implementations use interior mutability so a store
/// can sit behind a shared handle. A store never fabricates a value: `get`
/// only returns what a prior `set` put there.
pub trait Store {
    /// The convertible type this store holds.
    type Item: Convertible;

    /// The slot key this store addresses, captured from
    /// [`Convertible::key`] at construction.
    fn key(&self) -> &str;

    /// Overwrite the slot with `value`.
    fn set(&self, value: &Self::Item);

    /// Read the slot back.
    ///
    /// Returns `None` if nothing was set, the slot was removed, or the
    /// stored transport value fails `from_transport`.
    fn get(&self) -> Option<Self::Item>;

    /// Clear the slot. Idempotent; never errors.
    fn remove(&self);
}

/// Type-erasing store handle.
///
/// Wraps any concrete [`Store`] for the same convertible type behind a boxed
/// trait object captured at construction, and forwards the three operations
/// unchanged. It has no behavior of its own, so swapping the wrapped backend
/// cannot change observable get/set/remove behavior.
///
/// ## Example
///
/// ```ignore
/// let store = AnyStore::new(MemoryStore::<CameraConfig>::new());
/// store.set(&config);
/// ```
pub struct AnyStore<C: Convertible> {
    inner: Box<dyn Store<Item = C>>,
}

impl<C: Convertible> AnyStore<C> {
    /// Erase `inner` behind the uniform handle.
    pub fn new<S>(inner: S) -> Self
    where
        S: Store<Item = C> + 'static,
    {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl<C: Convertible> Store for AnyStore<C> {
    type Item = C;

    fn key(&self) -> &str {
        self.inner.key()
    }

    fn set(&self, value: &C) {
        self.inner.set(value);
    }

    fn get(&self) -> Option<C> {
        self.inner.get()
    }

    fn remove(&self) {
        self.inner.remove();
    }
}

impl<C: Convertible> std::fmt::Debug for AnyStore<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyStore").field("key", &self.key()).finish()
    }
}
