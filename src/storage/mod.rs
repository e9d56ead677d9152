// ABOUTME: Durable key-value storage abstraction for the persisted sandbox document
// ABOUTME: Pluggable backends (file, in-memory) behind the DocumentStorage trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// File-per-key storage in a directory
pub mod file;
/// In-memory storage for tests and ephemeral sessions
pub mod memory;

use physio_core::errors::AppResult;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage provider trait for pluggable backend implementations
///
/// Documents are opaque UTF-8 text addressed by a single key. The state
/// store reads once at startup and writes after every mutation; it treats
/// write failures as best-effort and never propagates them.
///
/// # Examples
///
/// ```rust
/// use physio_sandbox::storage::{DocumentStorage, MemoryStorage};
/// # fn example() -> physio_core::errors::AppResult<()> {
/// let storage = MemoryStorage::new();
/// storage.save("physio_sandbox_state_v1", r#"{"record":{}}"#)?;
/// assert!(storage.load("physio_sandbox_state_v1")?.is_some());
/// # Ok(())
/// # }
/// ```
pub trait DocumentStorage: Send {
    /// Read the document stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend is unreadable. A missing key is
    /// `Ok(None)`, not an error.
    fn load(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the document stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the write fails
    fn save(&self, key: &str, document: &str) -> AppResult<()>;

    /// Backend name for logging
    fn backend_name(&self) -> &'static str;
}
