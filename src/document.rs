// ABOUTME: Interchange and persisted document formats of the sandbox state
// ABOUTME: Export with metadata, strict-shape import with defaults filling and legacy key aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Document interchange
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "exported_at": "2025-01-01T12:00:00Z",
//!   "units": { "glucose": "mg", "lipids": "mmol" },
//!   "record": { "sex": "male", "age": 35, ... },
//!   "snapshotA": null,
//!   "snapshotB": { ... }
//! }
//! ```
//!
//! The persisted document has the same shape without `format_version` and
//! `exported_at`. Import only insists on `record` (or its legacy name
//! `state`); every missing record member is filled from the default profile.

use chrono::{DateTime, Utc};
use physio_core::constants::storage::DOCUMENT_FORMAT_VERSION;
use physio_core::errors::{AppError, AppResult};
use physio_core::models::{StateRecord, UnitModes};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record plus comparison snapshots and the unit modes their values are expressed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandboxDocument {
    /// Unit modes of every glucose and lipid value in this document
    #[serde(default)]
    pub units: UnitModes,
    /// Active record
    #[serde(alias = "state")]
    pub record: StateRecord,
    /// Snapshot slot A
    #[serde(rename = "snapshotA", alias = "snapA", default)]
    pub snapshot_a: Option<StateRecord>,
    /// Snapshot slot B
    #[serde(rename = "snapshotB", alias = "snapB", default)]
    pub snapshot_b: Option<StateRecord>,
}

/// Export envelope adding format metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Interchange format version
    pub format_version: u32,
    /// Export time
    pub exported_at: DateTime<Utc>,
    /// Payload
    #[serde(flatten)]
    pub document: SandboxDocument,
}

impl ExportDocument {
    /// Wrap `document` with the current format version and time
    #[must_use]
    pub fn new(document: SandboxDocument) -> Self {
        Self {
            format_version: DOCUMENT_FORMAT_VERSION,
            exported_at: Utc::now(),
            document,
        }
    }

    /// Pretty-printed JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A parsed import, not yet applied to any store
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedDocument {
    /// Unit modes declared by the document, if any
    pub units: Option<UnitModes>,
    /// Record with missing members filled from defaults
    pub record: StateRecord,
    /// Snapshot slot A
    pub snapshot_a: Option<StateRecord>,
    /// Snapshot slot B
    pub snapshot_b: Option<StateRecord>,
}

#[derive(Deserialize)]
struct ImportShape {
    #[serde(default)]
    units: Option<UnitModes>,
    #[serde(alias = "state")]
    record: StateRecord,
    #[serde(rename = "snapshotA", alias = "snapA", default)]
    snapshot_a: Option<StateRecord>,
    #[serde(rename = "snapshotB", alias = "snapB", default)]
    snapshot_b: Option<StateRecord>,
}

/// Parse an interchange document
///
/// Unknown members (including `format_version` and `exported_at`) are ignored.
///
/// # Errors
///
/// - `SerializationError` if the text is not JSON or a member has the wrong shape
/// - `InvalidFormat` if the top level is not an object
/// - `MissingRequiredField` if there is no non-null `record` (or `state`)
pub fn parse_document(text: &str) -> AppResult<ImportedDocument> {
    let value: Value = serde_json::from_str(text)?;
    let Some(object) = value.as_object() else {
        return Err(AppError::invalid_format(
            "Document must be a JSON object",
        ));
    };

    let has_record = ["record", "state"]
        .iter()
        .any(|key| object.get(*key).is_some_and(|member| !member.is_null()));
    if !has_record {
        return Err(AppError::missing_field("record"));
    }

    let shape: ImportShape = serde_json::from_value(value)?;
    Ok(ImportedDocument {
        units: shape.units,
        record: shape.record,
        snapshot_a: shape.snapshot_a,
        snapshot_b: shape.snapshot_b,
    })
}

/// Parse the persisted document written by the store
///
/// # Errors
///
/// Returns a serialization error if the text does not match the persisted shape
pub fn parse_persisted(text: &str) -> AppResult<SandboxDocument> {
    Ok(serde_json::from_str(text)?)
}
