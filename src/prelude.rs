//! Common imports for typedstore users.
//!
//! ```
//! use typedstore::prelude::*;
//! ```

pub use typedstore_backends::{
    FileBackend, MemoryBackend, MemoryStore, PersistentStore, StorageBackend,
};
pub use typedstore_core::{AnyStore, Convertible, KeySpace, Store, Value};
