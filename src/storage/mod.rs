//! Local key-value storage.
//!
//! Survey snapshots are kept in a single slot of a small string-to-string
//! store. `FileStorage` keeps every slot in one JSON object on disk;
//! `MemoryStorage` keeps them in a map and backs the tests.

mod error;

pub use error::StorageError;

use log::*;
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "storage.json";

/// A string-keyed slot store.
///
pub trait KeyValueStore {
    /// Return the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed store. Every write rewrites the whole file.
///
#[derive(Debug, Clone)]
pub struct FileStorage {
    file_path: PathBuf,
}

impl FileStorage {
    /// Open the store inside `dir`, creating the directory if needed. The
    /// file itself is only created on the first write.
    ///
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| StorageError::CreateDirectoryFailed {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }
        Ok(FileStorage {
            file_path: dir.join(FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents =
            fs::read_to_string(&self.file_path).map_err(|e| StorageError::ReadFailed {
                path: self.file_path.clone(),
                source: e,
            })?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents).map_err(|e| StorageError::Corrupted {
            path: self.file_path.clone(),
            message: e.to_string(),
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(items)
            .map_err(|e| StorageError::EncodeFailed(e.to_string()))?;
        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }
        let mut file = fs::File::create(&self.file_path).map_err(|e| StorageError::WriteFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| StorageError::WriteFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| StorageError::WriteFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)?;
        debug!("Wrote key '{}' to {}", key, self.file_path.display());
        Ok(())
    }
}

/// In-memory store.
///
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
