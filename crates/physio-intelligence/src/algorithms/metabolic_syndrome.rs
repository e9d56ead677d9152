// ABOUTME: Five-criterion metabolic syndrome screening with sex-specific cut-offs
// ABOUTME: Evaluates waist, triglycerides, HDL, blood pressure and fasting glucose independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::physiological_constants::metabolic_syndrome::{
    DBP_FROM, FEMALE_HDL_BELOW_MGDL, FEMALE_WAIST_FROM_CM, GLUCOSE_FROM_MGDL, MALE_HDL_BELOW_MGDL,
    MALE_WAIST_FROM_CM, SBP_FROM, TG_FROM_MGDL,
};
use crate::units::{glucose_mgdl, hdl_mgdl, tg_mgdl};
use physio_core::models::{StateRecord, UnitModes};
use serde::{Deserialize, Serialize};

/// Which screening criteria are met
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetabolicSyndromeCriteria {
    /// Waist at or above 94 cm (male) / 80 cm (female)
    pub waist: bool,
    /// Triglycerides at or above 150 mg/dL
    pub triglycerides: bool,
    /// HDL below 40 mg/dL (male) / 50 mg/dL (female)
    pub hdl: bool,
    /// Systolic at or above 130 or diastolic at or above 85 mmHg
    pub blood_pressure: bool,
    /// Fasting glucose at or above 100 mg/dL
    pub glucose: bool,
}

impl MetabolicSyndromeCriteria {
    /// Evaluate each criterion; comparisons against `NaN` count as not met
    #[must_use]
    pub fn evaluate(record: &StateRecord, units: UnitModes) -> Self {
        let male = record.sex.is_male();
        let waist_from = if male {
            MALE_WAIST_FROM_CM
        } else {
            FEMALE_WAIST_FROM_CM
        };
        let hdl_below = if male {
            MALE_HDL_BELOW_MGDL
        } else {
            FEMALE_HDL_BELOW_MGDL
        };

        Self {
            waist: record.waist_cm >= waist_from,
            triglycerides: tg_mgdl(record, units) >= TG_FROM_MGDL,
            hdl: hdl_mgdl(record, units) < hdl_below,
            blood_pressure: record.sbp >= SBP_FROM || record.dbp >= DBP_FROM,
            glucose: glucose_mgdl(record, units) >= GLUCOSE_FROM_MGDL,
        }
    }

    /// Number of met criteria, always within `0..=5`
    #[must_use]
    pub fn count(&self) -> u8 {
        [
            self.waist,
            self.triglycerides,
            self.hdl,
            self.blood_pressure,
            self.glucose,
        ]
        .into_iter()
        .map(u8::from)
        .sum()
    }
}

/// Number of met screening criteria
#[must_use]
pub fn metabolic_syndrome_count(record: &StateRecord, units: UnitModes) -> u8 {
    MetabolicSyndromeCriteria::evaluate(record, units).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physiological_constants::metabolic_syndrome::CRITERIA_COUNT;
    use physio_core::models::Sex;

    #[test]
    fn test_default_profile_meets_nothing() {
        assert_eq!(
            metabolic_syndrome_count(&StateRecord::default(), UnitModes::default()),
            0
        );
    }

    #[test]
    fn test_every_criterion_counts_once() {
        let record = StateRecord {
            waist_cm: 102.0,
            tg: 180.0,
            hdl: 35.0,
            sbp: 125.0,
            dbp: 86.0,
            glucose: 110.0,
            ..StateRecord::default()
        };
        assert_eq!(
            metabolic_syndrome_count(&record, UnitModes::default()),
            CRITERIA_COUNT
        );
    }

    #[test]
    fn test_sex_specific_cut_offs() {
        let record = StateRecord {
            sex: Sex::Female,
            waist_cm: 84.0,
            hdl: 45.0,
            ..StateRecord::default()
        };
        let criteria = MetabolicSyndromeCriteria::evaluate(&record, UnitModes::default());
        assert!(criteria.waist);
        assert!(criteria.hdl);
        assert_eq!(criteria.count(), 2);

        let male = StateRecord {
            sex: Sex::Male,
            ..record
        };
        assert_eq!(metabolic_syndrome_count(&male, UnitModes::default()), 0);
    }

    #[test]
    fn test_nan_fields_never_meet_a_criterion() {
        let record = StateRecord {
            waist_cm: f64::NAN,
            tg: f64::NAN,
            glucose: f64::NAN,
            ..StateRecord::default()
        };
        assert_eq!(metabolic_syndrome_count(&record, UnitModes::default()), 0);
    }
}
