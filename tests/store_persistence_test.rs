// ABOUTME: Integration tests for state store persistence and change notification
// ABOUTME: Startup restore, corrupt documents, suppressed write failures and observer delivery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, memory_store, persisted};
use physio_core::constants::storage::STORAGE_KEY;
use physio_core::models::{QuantityFamily, RecordField, StateRecord, UnitMode};
use physio_sandbox::storage::{FileStorage, MemoryStorage};
use physio_sandbox::store::StateStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn counting_observer(store: &mut StateStore) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    store.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    count
}

#[test]
fn test_every_mutation_persists() {
    let (mut store, storage) = memory_store();
    assert!(persisted(&storage).is_none());

    store.set(RecordField::WeightKg, 81.0).unwrap();
    let document = persisted(&storage).unwrap();
    assert_eq!(document["record"]["weight_kg"], 81.0);
    assert!(document["snapshotA"].is_null());
    assert_eq!(document["units"]["glucose"], "mg");
    assert!(document.get("format_version").is_none());

    store.set_snapshot_a();
    let document = persisted(&storage).unwrap();
    assert_eq!(document["snapshotA"]["weight_kg"], 81.0);
}

#[test]
fn test_open_restores_record_snapshots_and_units() {
    let (mut store, storage) = memory_store();
    store.set(RecordField::Age, 52.0).unwrap();
    store.set_snapshot_b();
    store.convert_units(QuantityFamily::Lipids, UnitMode::Mmol).unwrap();
    let expected = store.record().clone();

    let reopened = StateStore::open(Box::new(storage), 50);
    assert_eq!(reopened.record(), &expected);
    assert_eq!(reopened.snapshot_b().map(|s| s.age), Some(52));
    assert_eq!(reopened.units().lipids, UnitMode::Mmol);
    assert_eq!(reopened.history_len(), 0);
}

#[test]
fn test_open_falls_back_on_corrupt_document() {
    init_test_logging();
    let storage = MemoryStorage::with_document(STORAGE_KEY, "{not json");
    let store = StateStore::open(Box::new(storage), 50);
    assert_eq!(store.record(), &StateRecord::default());

    let storage = MemoryStorage::with_document(STORAGE_KEY, r#"{"units": {}}"#);
    let store = StateStore::open(Box::new(storage), 50);
    assert_eq!(store.record(), &StateRecord::default());
}

#[test]
fn test_open_fills_missing_members_from_defaults() {
    init_test_logging();
    let storage = MemoryStorage::with_document(STORAGE_KEY, r#"{"record": {"height_cm": 165}}"#);
    let store = StateStore::open(Box::new(storage), 50);
    assert!((store.record().height_cm - 165.0).abs() < f64::EPSILON);
    assert!((store.record().weight_kg - 75.0).abs() < f64::EPSILON);
}

#[test]
fn test_write_failures_are_suppressed() {
    let (mut store, storage) = memory_store();
    let notifications = counting_observer(&mut store);
    storage.set_fail_writes(true);

    store.set(RecordField::WeightKg, 77.0).unwrap();
    store.set_snapshot_a();

    assert!((store.record().weight_kg - 77.0).abs() < f64::EPSILON);
    assert!(store.snapshot_a().is_some());
    assert_eq!(notifications.load(Ordering::SeqCst), 2);
    assert!(persisted(&storage).is_none());

    storage.set_fail_writes(false);
    store.undo();
    assert_eq!(persisted(&storage).unwrap()["record"]["weight_kg"], 75.0);
}

#[test]
fn test_one_notification_per_mutation() {
    let (mut store, _) = memory_store();
    let notifications = counting_observer(&mut store);

    store.set(RecordField::WeightKg, 80.0).unwrap();
    store.set_input(RecordField::Age, "40");
    store.apply_scenario("Sitzend").unwrap();
    store.reset();
    store.apply_optimum();
    store.undo();
    store.redo();
    store.set_snapshot_a();
    store.set_snapshot_b();
    store.clear_snapshots();
    store.convert_units(QuantityFamily::Glucose, UnitMode::Mmol).unwrap();
    assert_eq!(notifications.load(Ordering::SeqCst), 11);
}

#[test]
fn test_no_notification_without_change() {
    let (mut store, _) = memory_store();
    let notifications = counting_observer(&mut store);

    assert!(!store.undo());
    assert!(!store.redo());
    assert!(!store.set_input(RecordField::WeightKg, "heavy"));
    assert!(store.apply_scenario("unknown").is_err());
    assert!(!store.convert_units(QuantityFamily::Lipids, UnitMode::Mg).unwrap());
    assert_eq!(notifications.load(Ordering::SeqCst), 0);
}

#[test]
fn test_observers_see_updated_record() {
    let (mut store, _) = memory_store();
    let weights = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&weights);
    store.subscribe(move |store| {
        sink.lock().unwrap().push(store.record().weight_kg);
    });

    store.set(RecordField::WeightKg, 70.0).unwrap();
    store.set(RecordField::WeightKg, 71.0).unwrap();
    store.undo();
    assert_eq!(*weights.lock().unwrap(), vec![70.0, 71.0, 70.0]);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let (mut store, _) = memory_store();
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let id = store.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    let other = counting_observer(&mut store);
    assert_eq!(store.observer_count(), 2);

    store.reset();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.reset();

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(other.load(Ordering::SeqCst), 2);
}

#[test]
fn test_file_backed_store_survives_restart() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    {
        let mut store = StateStore::open(Box::new(FileStorage::new(dir.path())), 50);
        store.set(RecordField::KcalIntake, 2100.0).unwrap();
        store.set_snapshot_a();
    }
    let store = StateStore::open(Box::new(FileStorage::new(dir.path())), 50);
    assert!((store.record().kcal_intake - 2100.0).abs() < f64::EPSILON);
    assert!(store.snapshot_a().is_some());
    assert_eq!(store.storage_backend(), "file");
}
