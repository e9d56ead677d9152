// ABOUTME: Linear weight trajectory over the projection horizon
// ABOUTME: One point per week from the current weight using the projected weekly change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::weight_change_per_week;
use crate::physiological_constants::projection::{
    DEFAULT_HORIZON_WEEKS, MAX_HORIZON_WEEKS, MIN_HORIZON_WEEKS,
};
use physio_core::models::StateRecord;
use serde::Serialize;

/// Weight at the end of `week`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    /// Week index, 0 is today
    pub week: u32,
    /// Projected weight (kg)
    pub weight_kg: f64,
}

/// Horizon actually projected: zero falls back to 12 weeks, otherwise clamped to 1..=52
#[must_use]
pub fn effective_horizon(horizon_weeks: u32) -> u32 {
    if horizon_weeks == 0 {
        DEFAULT_HORIZON_WEEKS
    } else {
        horizon_weeks.clamp(MIN_HORIZON_WEEKS, MAX_HORIZON_WEEKS)
    }
}

/// `horizon + 1` points starting at the current weight
#[must_use]
pub fn project_weight(record: &StateRecord) -> Vec<ProjectionPoint> {
    let weekly = weight_change_per_week(record);
    (0..=effective_horizon(record.horizon_weeks))
        .map(|week| ProjectionPoint {
            week,
            weight_kg: weekly.mul_add(f64::from(week), record.weight_kg),
        })
        .collect()
}
