// ABOUTME: In-memory document storage shared between clones of the handle
// ABOUTME: Supports simulated write failures to exercise best-effort persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DocumentStorage;
use physio_core::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory storage
///
/// Clones share the same entries, so a test can keep one handle and give
/// another to the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStorage {
    /// Empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one document
    #[must_use]
    pub fn with_document(key: &str, document: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.write() {
            entries.insert(key.to_owned(), document.to_owned());
        }
        storage
    }

    /// Make every subsequent `save` fail (quota exceeded, disk gone)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::storage("Simulated storage write failure"));
        }
        Ok(())
    }
}

impl DocumentStorage for MemoryStorage {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::internal("Memory storage lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, document: &str) -> AppResult<()> {
        self.check_writable()?;
        self.entries
            .write()
            .map_err(|_| AppError::internal("Memory storage lock poisoned"))?
            .insert(key.to_owned(), document.to_owned());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
