// ABOUTME: File-backed document storage writing one JSON file per key
// ABOUTME: Writes go through a temporary file and a rename so a crash never leaves half a document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DocumentStorage;
use physio_core::errors::{AppError, AppResult};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing `key`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for keys that are empty or would escape the directory
    pub fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(AppError::invalid_input(format!(
                "Storage key '{key}' is not a plain file name"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl DocumentStorage for FileStorage {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, document: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, document)?;
        fs::rename(&staging, &path)?;
        debug!(path = %path.display(), bytes = document.len(), "Document written");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_loads_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.load("absent").unwrap(), None);
    }

    #[test]
    fn test_save_creates_directory_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));
        storage.save("doc", "first").unwrap();
        storage.save("doc", "second").unwrap();
        assert_eq!(storage.load("doc").unwrap().as_deref(), Some("second"));
        assert!(!dir.path().join("nested").join("doc.json.tmp").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let storage = FileStorage::new("/tmp");
        assert!(storage.path_for("../escape").is_err());
        assert!(storage.path_for("").is_err());
    }
}
