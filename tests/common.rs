// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and store/session builders over in-memory storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `physio_sandbox`

use physio_core::constants::storage::{HISTORY_MAX, STORAGE_KEY};
use physio_core::models::StateRecord;
use physio_sandbox::config::SensitivityConfig;
use physio_sandbox::session::Sandbox;
use physio_sandbox::storage::{DocumentStorage, MemoryStorage};
use physio_sandbox::store::StateStore;
use serde_json::Value;
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Store over fresh in-memory storage, plus a handle onto that storage
pub fn memory_store() -> (StateStore, MemoryStorage) {
    memory_store_with_limit(HISTORY_MAX)
}

/// Store with an explicit undo bound
pub fn memory_store_with_limit(history_limit: usize) -> (StateStore, MemoryStorage) {
    init_test_logging();
    let storage = MemoryStorage::new();
    let store = StateStore::new(Box::new(storage.clone()), history_limit);
    (store, storage)
}

/// Session over fresh in-memory storage with default sensitivity settings
pub fn memory_sandbox() -> Sandbox {
    let (store, _) = memory_store();
    Sandbox::new(store, SensitivityConfig::default())
}

/// The persisted document currently held by `storage`, parsed
pub fn persisted(storage: &MemoryStorage) -> Option<Value> {
    storage
        .load(STORAGE_KEY)
        .unwrap()
        .map(|text| serde_json::from_str(&text).unwrap())
}

/// Default record with a different weight
pub fn record_with_weight(weight_kg: f64) -> StateRecord {
    StateRecord {
        weight_kg,
        ..StateRecord::default()
    }
}

/// Relative comparison for unit conversions
pub fn relative_eq(a: f64, b: f64) -> bool {
    if b == 0.0 {
        return a.abs() < 1e-12;
    }
    ((a - b) / b).abs() < 1e-9
}
