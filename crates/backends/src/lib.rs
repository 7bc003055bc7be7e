//! Store backends for typedstore
//!
//! This crate implements the concrete stores behind the core contracts:
//! - [`MemoryStore`]: single slot in process memory
//! - [`PersistentStore`]: delegates to a shared [`StorageBackend`] handle
//! - [`FileBackend`]: durable facility over a serde_json file
//! - [`MemoryBackend`]: map-based facility, dictionary store and test double

#![warn(missing_docs)]

pub mod backend;
pub mod file;
pub mod memory;
pub mod persistent;

pub use backend::{MemoryBackend, StorageBackend};
pub use file::FileBackend;
pub use memory::MemoryStore;
pub use persistent::PersistentStore;
