//! Local record store.
//!
//! The store is a small keyed record collaborator: components receive a
//! handle at construction time instead of reaching into process-wide state.
//! [`JsonFileStore`] persists one JSON document per key under a data
//! directory using atomic writes; [`MemoryStore`] keeps records in memory
//! and backs the tests.

use std::{
    collections::HashMap,
    fs, io,
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use log::{debug, error, info, trace, warn};
use tempfile::NamedTempFile;

use crate::{CogsError, Result};

/// Keyed record storage used by the credential service.
///
/// Implementations must treat a missing key as `Ok(None)` on reads and as a
/// successful no-op on deletes.
pub trait RecordStore {
    /// Writes `value` under `key`, overwriting any prior record
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Reads the record stored under `key`, or `None` when absent
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Deletes the record under `key`; deleting an absent key is a no-op
    fn delete(&self, key: &str) -> Result<()>;
}

/// File-backed record store: one `<key>.json` file per record.
pub struct JsonFileStore {
    /// Directory holding the record files
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens (and if needed creates) the store rooted at `root`.
    ///
    /// Failure to create the directory is a startup-time hard failure; the
    /// caller is expected to halt rather than continue without persistence.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            debug!("Record directory does not exist, creating: {}", root.display());
            fs::create_dir_all(&root).map_err(|e| {
                error!("Failed to create record directory: {}", e);
                CogsError::DirectoryError { path: root.clone() }
            })?;
        }
        info!("Record store opened at {}", root.display());
        Ok(JsonFileStore { root })
    }

    /// Helper method to get the file path for a record key
    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl RecordStore for JsonFileStore {
    /// Writes a record using a temporary file and an atomic rename, so a
    /// crash mid-write never leaves a partial record behind.
    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        let file_path = self.record_path(key);
        debug!("Writing record '{}' to {}", key, file_path.display());

        let dir = file_path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| {
            error!("Failed to create temporary file: {}", e);
            CogsError::Io(e)
        })?;

        trace!("Writing {} bytes to temporary file", value.len());
        temp_file.write_all(value).map_err(|e| {
            error!("Failed to write to temporary file: {}", e);
            CogsError::Io(e)
        })?;

        temp_file.flush().map_err(|e| {
            error!("Failed to flush temporary file: {}", e);
            CogsError::Io(e)
        })?;

        temp_file.persist(&file_path).map_err(|e| {
            error!("Failed to persist file {}: {}", file_path.display(), e.error);
            CogsError::Io(e.error)
        })?;

        trace!("Record '{}' written", key);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let file_path = self.record_path(key);
        debug!("Reading record '{}' from {}", key, file_path.display());

        match fs::read(&file_path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                trace!("Record '{}' not found", key);
                Ok(None)
            }
            Err(e) => {
                error!("Failed to read record {}: {}", file_path.display(), e);
                Err(CogsError::Io(e))
            }
        }
    }

    fn delete(&self, key: &str) -> Result<()> {
        let file_path = self.record_path(key);
        debug!("Deleting record '{}' at {}", key, file_path.display());

        match fs::remove_file(&file_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                trace!("Record '{}' already absent, nothing to delete", key);
                Ok(())
            }
            Err(e) => {
                error!("Failed to delete record {}: {}", file_path.display(), e);
                Err(CogsError::Io(e))
            }
        }
    }
}

/// In-memory record store.
///
/// The mutex keeps the store usable behind a shared reference; all access
/// in the application itself is single-threaded.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        match self.records.lock() {
            Ok(mut records) => {
                records.insert(key.to_string(), value.to_vec());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to acquire lock on memory store: {}", e);
                Err(CogsError::StoreError {
                    key: key.to_string(),
                    message: "memory store lock poisoned".to_string(),
                })
            }
        }
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.records.lock() {
            Ok(records) => Ok(records.get(key).cloned()),
            Err(e) => {
                warn!("Failed to acquire lock on memory store: {}", e);
                Err(CogsError::StoreError {
                    key: key.to_string(),
                    message: "memory store lock poisoned".to_string(),
                })
            }
        }
    }

    fn delete(&self, key: &str) -> Result<()> {
        match self.records.lock() {
            Ok(mut records) => {
                records.remove(key);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to acquire lock on memory store: {}", e);
                Err(CogsError::StoreError {
                    key: key.to_string(),
                    message: "memory store lock poisoned".to_string(),
                })
            }
        }
    }
}
