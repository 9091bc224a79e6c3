//! Key/value persistence boundary.
//!
//! The store keeps its whole collection as one JSON string under a single key,
//! the same way the dashboard used browser local storage. [`FileStorage`] maps
//! each key to `<root>/<key>.json`; [`MemoryStorage`] keeps values in memory.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, StorageError};

pub trait Storage {
    /// Read the value stored under `key`. `Ok(None)` means the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

fn check_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// One JSON file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StorageError::Io {
                operation: "read",
                path,
                source: error,
            }),
        }
    }

    /// Written atomically: temp file, fsync, rename.
    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.root).map_err(|e| StorageError::Io {
            operation: "create directory",
            path: self.root.clone(),
            source: e,
        })?;

        let mut file = File::create(&temp_path).map_err(|e| StorageError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(value.as_bytes())
            .map_err(|e| StorageError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| StorageError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| StorageError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote storage key");
        Ok(())
    }
}

/// In-memory storage, mainly for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one key.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self { values }
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_storage_round_trip() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.read("roster").unwrap(), None);
        storage.write("roster", "[]").unwrap();
        assert_eq!(storage.read("roster").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested/roster.json").exists());
        assert!(!dir.path().join("nested/roster.json.tmp").exists());
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        assert!(matches!(
            storage.write("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            MemoryStorage::new().read(""),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
