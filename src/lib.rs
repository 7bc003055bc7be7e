//! # typedstore
//!
//! Typed single-slot key-value stores with swappable backends.
//!
//! A domain type implements [`Convertible`] to name its slot and map itself
//! to/from the transport [`Value`]; any [`Store`] backend then holds at most
//! one value for that type. Call sites that should not care which backend
//! was chosen hold an [`AnyStore`] handle instead of a concrete store.
//!
//! ## Quick Start
//!
//! ```
//! use typedstore::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Volume(i64);
//!
//! impl Convertible for Volume {
//!     fn key() -> String {
//!         KeySpace::new("com.example.player").key("Volume")
//!     }
//!
//!     fn to_transport(&self) -> Value {
//!         Value::Int(self.0)
//!     }
//!
//!     fn from_transport(value: &Value) -> Option<Self> {
//!         value.as_int().map(Volume)
//!     }
//! }
//!
//! // Backend chosen here; call sites only see the erased handle.
//! let store = AnyStore::new(MemoryStore::<Volume>::new());
//!
//! store.set(&Volume(7));
//! assert_eq!(store.get(), Some(Volume(7)));
//!
//! store.remove();
//! assert_eq!(store.get(), None);
//! ```
//!
//! ## Backends
//!
//! - [`MemoryStore`] - process-local slot, dropped with the store
//! - [`PersistentStore`] - delegates to a shared [`StorageBackend`] handle
//!   such as [`FileBackend`] (durable JSON file) or [`MemoryBackend`]
//!   (dictionary, handy in tests)
//!
//! Backends are passed in explicitly; there is no global facility.

#![warn(missing_docs)]

pub mod prelude;

pub use typedstore_backends::{
    FileBackend, MemoryBackend, MemoryStore, PersistentStore, StorageBackend,
};
pub use typedstore_core::{AnyStore, Convertible, Error, KeySpace, Result, Store, Value};
