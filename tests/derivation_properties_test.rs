// ABOUTME: Integration tests for the derivation engine and category classifier
// ABOUTME: Worked examples, monotonicity, LDL definedness and total-domain evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use physio_core::models::{QuantityFamily, Sex, StateRecord, UnitMode, UnitModes};
use physio_intelligence::algorithms::{
    bmi, homa_ir, ldl_in_active_unit, ldl_mgdl, metabolic_syndrome_count,
    MetabolicSyndromeCriteria,
};
use physio_intelligence::categories::{BmiCategory, HomaCategory, LdlCategory};
use physio_intelligence::{derive_vector, CategoryReport, MetricKey, RiskCategory, Severity};

#[test]
fn test_bmi_example_is_normal() {
    let record = StateRecord::default();
    let value = bmi(&record);
    assert!((value - 75.0 / (1.8 * 1.8)).abs() < 1e-12);
    let category = BmiCategory::classify(value);
    assert_eq!(category, BmiCategory::Normal);
    assert_eq!(category.label(), "Normal");
    assert_eq!(category.severity(), Severity::Good);
}

#[test]
fn test_bmi_is_monotonic_in_weight() {
    let mut previous = f64::NEG_INFINITY;
    for weight in (40..=160).map(f64::from) {
        let record = StateRecord {
            weight_kg: weight,
            ..StateRecord::default()
        };
        let value = bmi(&record);
        assert!(value > previous);
        previous = value;
    }
}

#[test]
fn test_bmi_band_boundaries() {
    assert_eq!(BmiCategory::classify(18.49), BmiCategory::Underweight);
    assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
}

#[test]
fn test_homa_example_is_elevated() {
    let record = StateRecord::default();
    let value = homa_ir(&record, UnitModes::default());
    assert!((value - 85.0 * 5.0 / 405.0).abs() < 1e-12);
    let category = HomaCategory::classify(value);
    assert_eq!(category.label(), "erhöht");
    assert_eq!(category.severity(), Severity::Caution);
}

#[test]
fn test_ldl_undefined_exactly_above_400_tg() {
    let units = UnitModes::default();
    for tg in [50.0, 150.0, 399.0, 400.0, 400.5, 401.0, 800.0] {
        let record = StateRecord {
            tg,
            ..StateRecord::default()
        };
        let ldl = ldl_mgdl(&record, units);
        if tg > 400.0 {
            assert!(!ldl.is_finite(), "tg {tg}");
            assert_eq!(ldl_in_active_unit(&record, units), None);
            assert_eq!(LdlCategory::classify(ldl), LdlCategory::NotApplicable);
            assert_eq!(LdlCategory::classify(ldl).severity(), Severity::Info);
        } else {
            assert!((ldl - (175.0 - 60.0 - tg / 5.0)).abs() < 1e-9, "tg {tg}");
        }
    }
}

#[test]
fn test_ldl_threshold_uses_mg_normalised_tg() {
    let units = UnitModes::default().with(QuantityFamily::Lipids, UnitMode::Mmol);
    let record = StateRecord {
        tc: 175.0 / 38.67,
        hdl: 60.0 / 38.67,
        tg: 450.0 / 88.57,
        ..StateRecord::default()
    };
    assert!(ldl_mgdl(&record, units).is_nan());
}

#[test]
fn test_metabolic_syndrome_count_matches_criteria() {
    let units = UnitModes::default();
    let profiles = [
        StateRecord::default(),
        StateRecord::optimum(),
        StateRecord {
            waist_cm: 102.0,
            tg: 180.0,
            hdl: 35.0,
            sbp: 135.0,
            glucose: 110.0,
            ..StateRecord::default()
        },
        StateRecord {
            sex: Sex::Female,
            waist_cm: 81.0,
            hdl: 45.0,
            ..StateRecord::default()
        },
    ];
    let expected: [u8; 4] = [0, 0, 5, 2];
    for (record, expected) in profiles.iter().zip(expected) {
        let criteria = MetabolicSyndromeCriteria::evaluate(record, units);
        let count = metabolic_syndrome_count(record, units);
        assert!(count <= 5);
        assert_eq!(count, criteria.count());
        assert_eq!(count, expected);
    }
}

#[test]
fn test_engine_is_total_over_hostile_inputs() {
    let hostile = [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
    for value in hostile {
        let record = StateRecord {
            height_cm: value,
            weight_kg: value,
            rhr: value,
            hdl: value,
            tg: value,
            glucose: value,
            insulin: value,
            pal: value,
            ..StateRecord::default()
        };
        let vector = derive_vector(&record, UnitModes::default());
        assert_eq!(vector.iter().count(), MetricKey::ALL.len());
        let report = CategoryReport::evaluate(&record, UnitModes::default());
        assert_eq!(report.badges().len(), 9);
    }
}

#[test]
fn test_body_fat_is_clamped() {
    let lean = StateRecord {
        weight_kg: 40.0,
        age: 18,
        ..StateRecord::default()
    };
    let heavy = StateRecord {
        weight_kg: 250.0,
        age: 90,
        sex: Sex::Female,
        ..StateRecord::default()
    };
    let units = UnitModes::default();
    let lean_bf = derive_vector(&lean, units).get(MetricKey::BodyFat);
    let heavy_bf = derive_vector(&heavy, units).get(MetricKey::BodyFat);
    assert!((lean_bf - 3.0).abs() < f64::EPSILON);
    assert!((heavy_bf - 60.0).abs() < f64::EPSILON);
}
