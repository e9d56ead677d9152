// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion, storage and history management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Persisted document and history constants
pub mod storage {
    /// Versioned key under which the local document is persisted
    pub const STORAGE_KEY: &str = "physio_sandbox_state_v1";

    /// Maximum number of undo entries kept before the oldest is evicted
    pub const HISTORY_MAX: usize = 50;

    /// Upper bound accepted for a configured history depth
    pub const HISTORY_LIMIT_CEILING: usize = 10_000;

    /// Interchange format version written into exported documents
    pub const DOCUMENT_FORMAT_VERSION: u32 = 1;
}

/// Service identity used by structured logging
pub mod service_names {
    /// Service name reported at startup
    pub const PHYSIO_SANDBOX: &str = "physio-sandbox";
}
