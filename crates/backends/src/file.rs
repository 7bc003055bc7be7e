//! File-backed persistence facility
//!
//! [`FileBackend`] is the durable [`StorageBackend`]: a JSON file holding the
//! whole key-value map, loaded once on open and mutated in memory. Writes
//! reach disk on [`flush`](StorageBackend::flush), which goes through a
//! temp-file-then-rename so a crash mid-write leaves the previous file
//! intact. Dropping the backend flushes best-effort.

use crate::backend::StorageBackend;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};
use typedstore_core::{Error, Result, Value};

/// Durable storage backend over a serde_json file.
///
/// One backend instance owns one file; share it across stores of different
/// types with `Arc`. I/O failures surface as [`Error`] from [`open`] and
/// `flush`, never through the store contract.
///
/// [`open`]: FileBackend::open
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    entries: RwLock<FxHashMap<String, Value>>,
    dirty: AtomicBool,
}

impl FileBackend {
    /// Open the backend at `path`, loading any existing map.
    ///
    /// A missing file starts the backend empty; a file that exists but does
    /// not decode as a string-to-value map is an error, not silently
    /// discarded data.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FxHashMap::default(),
            Err(e) => return Err(Error::Io(e)),
        };
        debug!(path = %path.display(), keys = entries.len(), "opened file backend");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
            dirty: AtomicBool::new(false),
        })
    }

    /// The file this backend persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_snapshot(&self) -> Result<()> {
        let text = {
            let entries = self.entries.read();
            serde_json::to_string_pretty(&*entries)?
        };
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get_value(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    fn set_value(&self, key: &str, value: Value) {
        self.entries.write().insert(key.to_string(), value);
        self.dirty.store(true, Ordering::Release);
    }

    fn remove_value(&self, key: &str) {
        let removed = self.entries.write().remove(key).is_some();
        if removed {
            self.dirty.store(true, Ordering::Release);
        }
    }

    fn flush(&self) -> Result<()> {
        if !self.dirty.load(Ordering::Acquire) {
            return Ok(());
        }
        self.write_snapshot()?;
        self.dirty.store(false, Ordering::Release);
        debug!(path = %self.path.display(), "flushed file backend");
        Ok(())
    }
}

impl Drop for FileBackend {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            warn!(path = %self.path.display(), error = %e, "flush on drop failed");
        }
    }
}
