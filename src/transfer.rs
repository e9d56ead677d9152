// ABOUTME: Async file boundary for document import and export
// ABOUTME: Reads the whole file before touching the store so failures never partially apply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::store::StateStore;
use physio_core::errors::{AppError, AppResult};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Import the interchange document at `path` into `store`
///
/// # Errors
///
/// Returns a storage error if the file cannot be read, or the parse error of
/// [`StateStore::import_document`]. The store is untouched in both cases.
pub async fn import_file(store: &mut StateStore, path: impl AsRef<Path>) -> AppResult<()> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display()))
    })?;
    store.import_document(&text)?;
    info!(path = %path.display(), "Imported document from file");
    Ok(())
}

/// Write the export document of `store` to `path`
///
/// # Errors
///
/// Returns a serialization error if encoding fails or a storage error if the
/// file cannot be written
pub async fn export_file(store: &StateStore, path: impl AsRef<Path>) -> AppResult<()> {
    let path = path.as_ref();
    let text = store.export_document()?;
    fs::write(path, text.as_bytes()).await.map_err(|e| {
        AppError::storage(format!("Failed to write {}: {e}", path.display()))
    })?;
    info!(path = %path.display(), "Exported document to file");
    Ok(())
}
