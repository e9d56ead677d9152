// ABOUTME: Age-predicted maximum heart rate and heart-rate-ratio VO2max estimate
// ABOUTME: Tanaka formula for HRmax and Uth-Sorensen ratio for aerobic capacity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::physiological_constants::cardiovascular::{
    TANAKA_AGE_SLOPE, TANAKA_INTERCEPT, UTH_SORENSEN_FACTOR,
};
use physio_core::models::StateRecord;

/// Maximum heart rate using Tanaka: `208 - 0.7 x age` (bpm)
///
/// # Reference
/// Tanaka, H. et al. (2001). *J Am Coll Cardiol*, 37(1), 153-156.
#[must_use]
pub fn max_heart_rate(record: &StateRecord) -> f64 {
    TANAKA_AGE_SLOPE.mul_add(-f64::from(record.age), TANAKA_INTERCEPT)
}

/// VO2max estimate `15.3 x HRmax / HRrest` (ml/kg/min)
///
/// A resting heart rate of zero gives an infinite estimate.
#[must_use]
pub fn vo2max(record: &StateRecord) -> f64 {
    UTH_SORENSEN_FACTOR * (max_heart_rate(record) / record.rhr)
}
