// ABOUTME: Integration tests for the session render pass
// ABOUTME: Temporal sensitivity baseline, A/B comparison and report serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{memory_sandbox, memory_store};
use physio_core::models::RecordField;
use physio_intelligence::MetricKey;
use physio_sandbox::config::SensitivityConfig;
use physio_sandbox::session::Sandbox;
use serde_json::Value;

#[test]
fn test_weight_edit_ranks_weight_driven_metrics() {
    let mut session = memory_sandbox();
    session.render();
    session.store_mut().set(RecordField::WeightKg, 80.0).unwrap();

    let report = session.render();
    let top: Vec<MetricKey> = report.sensitivity.items.iter().map(|d| d.metric).collect();
    assert_eq!(top.len(), 5);
    assert!(top.contains(&MetricKey::Bmi), "BMI missing from {top:?}");
    assert!(!top.contains(&MetricKey::Ldl));
}

#[test]
fn test_baseline_moves_on_every_render() {
    let mut session = memory_sandbox();
    session.render();
    session.store_mut().set(RecordField::KcalDelta, 400.0).unwrap();
    let changed = session.render();
    assert!(changed.sensitivity.items[0].score > 0.0);

    // No mutation in between: the previous render is the baseline
    let repeated = session.render();
    assert!(repeated
        .sensitivity
        .items
        .iter()
        .all(|item| item.delta.abs() < f64::EPSILON));
    assert_eq!(repeated.sensitivity.last_changed, Some(RecordField::KcalDelta));
}

#[test]
fn test_top_n_follows_configuration() {
    let (store, _) = memory_store();
    let config = SensitivityConfig {
        top_n: 2,
        ..SensitivityConfig::default()
    };
    let mut session = Sandbox::new(store, config);
    session.render();
    session.store_mut().apply_scenario("Aktiv").unwrap();
    assert_eq!(session.render().sensitivity.items.len(), 2);
}

#[test]
fn test_comparison_is_b_minus_a_over_all_metrics() {
    let mut session = memory_sandbox();
    session.store_mut().set_snapshot_a();
    session.store_mut().set(RecordField::WeightKg, 70.0).unwrap();
    session.store_mut().set_snapshot_b();

    let comparison = session.render().comparison.unwrap();
    assert_eq!(comparison.len(), MetricKey::ALL.len());
    let bmi = comparison
        .iter()
        .find(|item| item.metric == MetricKey::Bmi)
        .unwrap();
    assert!((bmi.delta - (70.0 - 75.0) / (1.8 * 1.8)).abs() < 1e-9);
    for pair in comparison.windows(2) {
        assert!(pair[0].score >= pair[1].score || !pair[1].score.is_finite());
    }
}

#[test]
fn test_clearing_snapshots_drops_comparison() {
    let mut session = memory_sandbox();
    session.store_mut().set_snapshot_a();
    session.store_mut().set_snapshot_b();
    assert!(session.render().comparison.is_some());
    session.store_mut().clear_snapshots();
    assert!(session.render().comparison.is_none());
}

#[test]
fn test_report_serializes_raw_values_and_codes() {
    let mut session = memory_sandbox();
    session.store_mut().set(RecordField::Tg, 450.0).unwrap();
    let json: Value = serde_json::to_value(session.render()).unwrap();

    assert!(json["derived"]["LDL"].is_null());
    assert!(json["lipids"]["ldl_active_unit"].is_null());
    let ldl = json["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["metric"] == "ldl")
        .unwrap();
    assert_eq!(ldl["code"], "not_applicable");
    assert_eq!(ldl["severity"], "info");
    assert_eq!(json["projection"].as_array().unwrap().len(), 13);
    assert_eq!(json["units"]["glucose"], "mg");
}

#[test]
fn test_projection_follows_horizon() {
    let mut session = memory_sandbox();
    session.store_mut().set(RecordField::HorizonWeeks, 0.0).unwrap();
    assert_eq!(session.render().projection.len(), 13);
    session.store_mut().set(RecordField::HorizonWeeks, 80.0).unwrap();
    assert_eq!(session.render().projection.len(), 53);
    session.store_mut().set(RecordField::HorizonWeeks, 4.0).unwrap();
    let projection = session.render().projection;
    assert_eq!(projection.len(), 5);
    assert!((projection[0].weight_kg - 75.0).abs() < f64::EPSILON);
}
