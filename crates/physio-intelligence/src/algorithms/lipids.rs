// ABOUTME: Lipid profile calculations normalized to mg/dL regardless of the active lipid unit
// ABOUTME: Friedewald LDL, non-HDL cholesterol and the triglyceride to HDL ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::physiological_constants::lipids::{FRIEDEWALD_MAX_TG_MGDL, FRIEDEWALD_TG_DIVISOR};
use crate::units::{from_mgdl, hdl_mgdl, tc_mgdl, tg_mgdl};
use physio_core::constants::units::CHOLESTEROL_MG_PER_MMOL;
use physio_core::models::{StateRecord, UnitModes};

/// Friedewald LDL: `TC - HDL - TG / 5` (mg/dL)
///
/// Undefined (`NaN`) when triglycerides exceed 400 mg/dL. A non-finite
/// triglyceride value also yields `NaN`.
#[must_use]
pub fn ldl_mgdl(record: &StateRecord, units: UnitModes) -> f64 {
    let tg = tg_mgdl(record, units);
    if tg <= FRIEDEWALD_MAX_TG_MGDL {
        tc_mgdl(record, units) - hdl_mgdl(record, units) - tg / FRIEDEWALD_TG_DIVISOR
    } else {
        f64::NAN
    }
}

/// LDL expressed in the active lipid unit, `None` when undefined
#[must_use]
pub fn ldl_in_active_unit(record: &StateRecord, units: UnitModes) -> Option<f64> {
    let ldl = ldl_mgdl(record, units);
    ldl.is_finite()
        .then(|| from_mgdl(ldl, units.lipids, CHOLESTEROL_MG_PER_MMOL))
}

/// Non-HDL cholesterol: `TC - HDL` (mg/dL)
#[must_use]
pub fn non_hdl_mgdl(record: &StateRecord, units: UnitModes) -> f64 {
    tc_mgdl(record, units) - hdl_mgdl(record, units)
}

/// Triglyceride to HDL ratio, both in mg/dL
///
/// Zero HDL gives an infinite (or `NaN` for zero triglycerides) ratio.
#[must_use]
pub fn tg_hdl_ratio(record: &StateRecord, units: UnitModes) -> f64 {
    tg_mgdl(record, units) / hdl_mgdl(record, units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use physio_core::models::{QuantityFamily, UnitMode};

    #[test]
    fn test_friedewald_default_profile() {
        let ldl = ldl_mgdl(&StateRecord::default(), UnitModes::default());
        assert!((ldl - (175.0 - 60.0 - 18.0)).abs() < 1e-9);
    }

    #[test]
    fn test_ldl_boundary_at_400() {
        let at_limit = StateRecord {
            tg: 400.0,
            ..StateRecord::default()
        };
        assert!(ldl_mgdl(&at_limit, UnitModes::default()).is_finite());

        let above = StateRecord {
            tg: 400.5,
            ..StateRecord::default()
        };
        assert!(ldl_mgdl(&above, UnitModes::default()).is_nan());
        assert_eq!(ldl_in_active_unit(&above, UnitModes::default()), None);
    }

    #[test]
    fn test_ldl_in_mmol_mode() {
        let units = UnitModes::default().with(QuantityFamily::Lipids, UnitMode::Mmol);
        let record = StateRecord {
            tc: 175.0 / 38.67,
            hdl: 60.0 / 38.67,
            tg: 90.0 / 88.57,
            ..StateRecord::default()
        };
        let ldl = ldl_in_active_unit(&record, units).unwrap_or(f64::NAN);
        assert!((ldl - 97.0 / 38.67).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_and_non_hdl() {
        let record = StateRecord::default();
        assert!((tg_hdl_ratio(&record, UnitModes::default()) - 1.5).abs() < 1e-12);
        assert!((non_hdl_mgdl(&record, UnitModes::default()) - 115.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_hdl_ratio_is_infinite() {
        let record = StateRecord {
            hdl: 0.0,
            ..StateRecord::default()
        };
        assert!(tg_hdl_ratio(&record, UnitModes::default()).is_infinite());
    }
}
