// ABOUTME: Energy model with Mifflin-St Jeor resting rate, activity and exercise additions
// ABOUTME: Computes effective expenditure, effective intake, energy balance and weekly weight change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Model
//!
//! ```text
//! RMR            = 10 x weight + 6.25 x height - 5 x age + (5 | -161)
//! TDEE(base)     = RMR x PAL
//! TDEE(eff)      = TDEE(base) + steps_extra x 0.045 + strength_pw x 50 / 7
//! intake(eff)    = kcal_intake + kcal_delta
//! balance        = intake(eff) - TDEE(eff)
//! weekly change  = balance x 7 / 7700
//! ```
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::physiological_constants::energy::{
    KCAL_PER_STEP, KCAL_PER_STRENGTH_SESSION, MSJ_AGE_COEF, MSJ_FEMALE_CONSTANT, MSJ_HEIGHT_COEF,
    MSJ_MALE_CONSTANT, MSJ_WEIGHT_COEF,
};
use physio_core::constants::units::{DAYS_PER_WEEK, KCAL_PER_KG_ADIPOSE};
use physio_core::models::{Sex, StateRecord};
use serde::{Deserialize, Serialize};

/// Resting metabolic rate via Mifflin-St Jeor (kcal/day)
///
/// Unlike a clinical calculator this does not validate ranges or floor the
/// result: the sandbox shows whatever the formula gives for the inputs.
#[must_use]
pub fn rmr(record: &StateRecord) -> f64 {
    let sex_constant = match record.sex {
        Sex::Male => MSJ_MALE_CONSTANT,
        Sex::Female => MSJ_FEMALE_CONSTANT,
    };
    MSJ_WEIGHT_COEF.mul_add(
        record.weight_kg,
        MSJ_HEIGHT_COEF.mul_add(
            record.height_cm,
            MSJ_AGE_COEF.mul_add(f64::from(record.age), sex_constant),
        ),
    )
}

/// Activity-scaled expenditure before exercise additions (kcal/day)
#[must_use]
pub fn tdee_base(record: &StateRecord) -> f64 {
    rmr(record) * record.pal
}

/// Extra expenditure from steps beyond baseline (kcal/day)
#[must_use]
pub fn kcal_extra_steps(record: &StateRecord) -> f64 {
    record.steps_extra * KCAL_PER_STEP
}

/// Extra expenditure from strength sessions spread over the week (kcal/day)
#[must_use]
pub fn kcal_extra_strength(record: &StateRecord) -> f64 {
    record.strength_pw * KCAL_PER_STRENGTH_SESSION / DAYS_PER_WEEK
}

/// Baseline intake plus manual adjustment (kcal/day)
#[must_use]
pub fn intake_effective(record: &StateRecord) -> f64 {
    record.kcal_intake + record.kcal_delta
}

/// Total expenditure including step and strength additions (kcal/day)
#[must_use]
pub fn tdee_effective(record: &StateRecord) -> f64 {
    tdee_base(record) + kcal_extra_steps(record) + kcal_extra_strength(record)
}

/// Effective intake minus effective expenditure (kcal/day)
#[must_use]
pub fn energy_balance(record: &StateRecord) -> f64 {
    intake_effective(record) - tdee_effective(record)
}

/// Projected weight change per week (kg), 7700 kcal per kg of adipose tissue
#[must_use]
pub fn weight_change_per_week(record: &StateRecord) -> f64 {
    energy_balance(record) * DAYS_PER_WEEK / KCAL_PER_KG_ADIPOSE
}

/// Every intermediate of the energy model, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// Resting metabolic rate (kcal/day)
    pub rmr: f64,
    /// RMR x PAL (kcal/day)
    pub tdee_base: f64,
    /// Step addition (kcal/day)
    pub kcal_extra_steps: f64,
    /// Strength addition (kcal/day)
    pub kcal_extra_strength: f64,
    /// Expenditure including additions (kcal/day)
    pub tdee_effective: f64,
    /// Intake including manual delta (kcal/day)
    pub intake_effective: f64,
    /// Intake minus expenditure (kcal/day)
    pub energy_balance: f64,
    /// Projected change (kg/week)
    pub weight_change_per_week: f64,
}

impl EnergyBreakdown {
    /// Evaluate the whole energy model for `record`
    #[must_use]
    pub fn from_record(record: &StateRecord) -> Self {
        Self {
            rmr: rmr(record),
            tdee_base: tdee_base(record),
            kcal_extra_steps: kcal_extra_steps(record),
            kcal_extra_strength: kcal_extra_strength(record),
            tdee_effective: tdee_effective(record),
            intake_effective: intake_effective(record),
            energy_balance: energy_balance(record),
            weight_change_per_week: weight_change_per_week(record),
        }
    }
}
