// ABOUTME: Main library entry point for the physiology what-if sandbox
// ABOUTME: State store, document interchange, storage backends and the session render pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Physio Sandbox
//!
//! An interactive "what-if" calculator for physiological metrics. Edit a
//! biometric profile and read back derived metrics (BMI, energy balance,
//! HOMA-IR, LDL, ...), risk categories, a weight projection, the metrics
//! that moved most since the last render, and an A/B snapshot comparison.
//!
//! ## Architecture
//!
//! - **`physio-core`**: errors, constants and the state record model
//! - **`physio-intelligence`**: pure derivation, classification and sensitivity ranking
//! - **store**: the single owner of the live record with undo/redo and snapshots
//! - **storage**: durable key-value backends for the persisted document
//! - **session**: the render pass combining store and sensitivity tracker
//!
//! ## Example Usage
//!
//! ```rust
//! use physio_core::models::RecordField;
//! use physio_sandbox::config::SensitivityConfig;
//! use physio_sandbox::session::Sandbox;
//! use physio_sandbox::storage::MemoryStorage;
//! use physio_sandbox::store::StateStore;
//!
//! # fn example() -> physio_core::errors::AppResult<()> {
//! let store = StateStore::new(Box::new(MemoryStorage::new()), 50);
//! let mut session = Sandbox::new(store, SensitivityConfig::default());
//! session.render();
//!
//! session.store_mut().set(RecordField::WeightKg, 82.0)?;
//! let report = session.render();
//! assert_eq!(report.sensitivity.last_changed, Some(RecordField::WeightKg));
//! # Ok(())
//! # }
//! ```

/// Process configuration from environment variables
pub mod config;

/// Interchange and persisted document formats
pub mod document;

/// Structured logging setup
pub mod logging;

/// Session facade and render report
pub mod session;

/// Durable document storage backends
pub mod storage;

/// State store with history, snapshots and observers
pub mod store;

/// Async file import and export
pub mod transfer;

pub use session::{Report, Sandbox};
pub use store::StateStore;
