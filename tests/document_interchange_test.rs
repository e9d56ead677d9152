// ABOUTME: Integration tests for document export and import through the state store
// ABOUTME: Round trips, rejected documents, legacy keys and unit adoption
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{memory_store, relative_eq};
use physio_core::errors::ErrorCode;
use physio_core::models::{QuantityFamily, RecordField, StateRecord, UnitMode};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_export_matches_store_contents() {
    let (mut store, _) = memory_store();
    store.set(RecordField::WeightKg, 83.0).unwrap();
    store.set_snapshot_b();

    let exported: Value = serde_json::from_str(&store.export_document().unwrap()).unwrap();
    assert_eq!(exported["format_version"], 1);
    assert_eq!(exported["record"]["weight_kg"], 83.0);
    assert!(exported["snapshotA"].is_null());
    assert_eq!(exported["snapshotB"]["weight_kg"], 83.0);
    assert_eq!(exported["units"]["lipids"], "mg");
}

#[test]
fn test_export_then_import_restores_state() {
    let (mut source, _) = memory_store();
    source.apply_optimum();
    source.set_snapshot_a();
    source.set(RecordField::Tg, 140.0).unwrap();
    let text = source.export_document().unwrap();

    let (mut target, _) = memory_store();
    target.import_document(&text).unwrap();
    assert_eq!(target.record(), source.record());
    assert_eq!(target.snapshot_a(), source.snapshot_a());
    assert_eq!(target.snapshot_b(), None);
}

#[test]
fn test_import_pushes_history() {
    let (mut store, _) = memory_store();
    store
        .import_document(r#"{"record": {"weight_kg": 99}}"#)
        .unwrap();
    assert!((store.record().weight_kg - 99.0).abs() < f64::EPSILON);
    assert_eq!(store.history_len(), 1);

    assert!(store.undo());
    assert_eq!(store.record(), &StateRecord::default());
}

#[test]
fn test_rejected_import_leaves_store_untouched() {
    let (mut store, _) = memory_store();
    store.set(RecordField::WeightKg, 79.0).unwrap();
    store.set_snapshot_a();
    let notifications = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&notifications);
    store.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    let before = store.record().clone();

    let missing = store
        .import_document(r#"{"snapshotA": null, "snapshotB": null}"#)
        .unwrap_err();
    assert_eq!(missing.code, ErrorCode::MissingRequiredField);

    let malformed = store.import_document("{\"record\": ").unwrap_err();
    assert_eq!(malformed.code, ErrorCode::SerializationError);

    let wrong_type = store
        .import_document(r#"{"record": {"weight_kg": "heavy"}}"#)
        .unwrap_err();
    assert_eq!(wrong_type.code, ErrorCode::SerializationError);

    assert_eq!(store.record(), &before);
    assert!(store.snapshot_a().is_some());
    assert_eq!(store.history_len(), 1);
    assert_eq!(notifications.load(Ordering::SeqCst), 0);
}

#[test]
fn test_import_without_snapshots_clears_them() {
    let (mut store, _) = memory_store();
    store.set_snapshot_a();
    store.set_snapshot_b();
    store.import_document(r#"{"record": {}}"#).unwrap();
    assert!(store.snapshot_a().is_none());
    assert!(store.snapshot_b().is_none());
    assert_eq!(store.record(), &StateRecord::default());
}

#[test]
fn test_import_accepts_legacy_keys() {
    let (mut store, _) = memory_store();
    store
        .import_document(r#"{"state": {"age": 61}, "snapA": {"age": 30}, "snapB": null}"#)
        .unwrap();
    assert_eq!(store.record().age, 61);
    assert_eq!(store.snapshot_a().map(|s| s.age), Some(30));
}

#[test]
fn test_import_adopts_document_units_and_converts_history() {
    let (mut store, _) = memory_store();
    store.set(RecordField::Glucose, 90.0).unwrap();

    store
        .import_document(r#"{"units": {"glucose": "mmol"}, "record": {"glucose": 5.5}}"#)
        .unwrap();
    assert_eq!(store.units().glucose, UnitMode::Mmol);
    assert_eq!(store.units().lipids, UnitMode::Mg);
    assert!((store.record().glucose - 5.5).abs() < f64::EPSILON);

    // The record replaced by the import is an undo entry in the new unit
    assert!(store.undo());
    assert!(relative_eq(store.record().glucose, 90.0 / 18.0182));
}

#[test]
fn test_import_without_units_means_mg() {
    let (mut store, _) = memory_store();
    assert!(store.convert_units(QuantityFamily::Lipids, UnitMode::Mmol).unwrap());
    store.import_document(r#"{"record": {"tc": 190}}"#).unwrap();
    assert_eq!(store.units().lipids, UnitMode::Mg);
    assert!((store.record().tc - 190.0).abs() < f64::EPSILON);
}
