// ABOUTME: Per-domain physiology formulas evaluated against a state record
// ABOUTME: Body composition, energy balance, cardiovascular, glycemic, lipid and metabolic syndrome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Formula modules
//!
//! Every function here is total over `f64`: negative, zero or non-finite
//! fields produce a (possibly non-finite) result rather than an error. Only
//! the body fat estimate is clamped. Glucose and lipid formulas take the
//! active [`UnitModes`](physio_core::models::UnitModes) and normalize to
//! mg/dL before evaluating.

pub mod body_composition;
pub mod cardiovascular;
pub mod energy;
pub mod glycemic;
pub mod lipids;
pub mod metabolic_syndrome;

pub use body_composition::{bmi, body_fat_pct};
pub use cardiovascular::{max_heart_rate, vo2max};
pub use energy::{
    energy_balance, intake_effective, kcal_extra_steps, kcal_extra_strength, rmr, tdee_base,
    tdee_effective, weight_change_per_week, EnergyBreakdown,
};
pub use glycemic::{eag_mgdl, eag_mmol, homa_ir};
pub use lipids::{ldl_in_active_unit, ldl_mgdl, non_hdl_mgdl, tg_hdl_ratio};
pub use metabolic_syndrome::{metabolic_syndrome_count, MetabolicSyndromeCriteria};
