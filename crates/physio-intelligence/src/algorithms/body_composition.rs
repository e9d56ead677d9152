// ABOUTME: Body mass index and Deurenberg body fat estimation
// ABOUTME: BMI from weight and height, body fat percentage clamped to a plausible range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::physiological_constants::body_composition::{
    BODY_FAT_MAX_PERCENT, BODY_FAT_MIN_PERCENT, DEURENBERG_AGE_COEF, DEURENBERG_BMI_COEF,
    DEURENBERG_CONSTANT, DEURENBERG_SEX_COEF,
};
use physio_core::constants::units::CM_PER_METER;
use physio_core::models::StateRecord;

/// Body mass index (kg/m²)
///
/// Formula: `weight_kg / (height_cm / 100)²`
///
/// A zero height yields an infinite value, not an error.
#[must_use]
pub fn bmi(record: &StateRecord) -> f64 {
    let height_m = record.height_cm / CM_PER_METER;
    record.weight_kg / (height_m * height_m)
}

/// Body fat percentage estimated with the Deurenberg formula
///
/// Formula: `1.2 x BMI + 0.23 x age - 10.8 x male - 5.4`, clamped to `[3, 60]`.
/// A non-finite BMI passes through the clamp unchanged.
///
/// # Reference
/// Deurenberg et al. (1991), *British Journal of Nutrition*, 65(2), 105-114
#[must_use]
pub fn body_fat_pct(record: &StateRecord) -> f64 {
    let sex_flag = if record.sex.is_male() { 1.0 } else { 0.0 };
    let estimate = DEURENBERG_BMI_COEF.mul_add(
        bmi(record),
        DEURENBERG_AGE_COEF.mul_add(f64::from(record.age), -DEURENBERG_SEX_COEF * sex_flag),
    ) - DEURENBERG_CONSTANT;
    estimate.clamp(BODY_FAT_MIN_PERCENT, BODY_FAT_MAX_PERCENT)
}
