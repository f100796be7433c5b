use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::NamedTempFile;

/// Fixed key naming the one durable slot that holds the task collection.
pub const SNAPSHOT_KEY: &str = "tasks";

/// Error type for snapshot storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// One durable key-value slot holding the serialized task collection.
///
/// The store writes through this seam after every mutation. Implementations
/// must leave the previous payload intact when a write fails.
pub trait Storage {
    /// Read the slot. `Ok(None)` means the slot has never been written.
    fn read(&self) -> Result<Option<String>, StorageError>;
    /// Replace the slot contents.
    fn write(&self, payload: &str) -> Result<(), StorageError>;
}

/// Snapshot slot backed by a single JSON file, `<dir>/tasks.json`.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &Path) -> Self {
        FileStorage {
            path: dir.join(format!("{SNAPSHOT_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        atomic_write(&self.path, payload.as_bytes()).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Write `content` to `path` atomically (temp file + rename).
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// In-memory slot for tests and ephemeral sessions.
///
/// Clones share the slot, so a test can hold one handle while the store owns
/// another. Single-threaded by design, like the rest of the crate.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot, e.g. with a snapshot from an earlier session.
    pub fn with_payload(payload: &str) -> Self {
        MemoryStorage {
            slot: Rc::new(RefCell::new(Some(payload.to_string()))),
        }
    }

    /// Current slot contents, `None` if never written.
    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.payload())
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}
