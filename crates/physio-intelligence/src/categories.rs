// ABOUTME: Qualitative risk bands for derived metrics, each tagged with a severity
// ABOUTME: Threshold tables for BMI, body fat, glucose, HOMA-IR, lipids, energy balance and blood pressure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Category Classifier
//!
//! Pure threshold tables. Boundaries are half-open on the lower bound, so a
//! value equal to a threshold falls into the band above it. Each category has
//! a stable English code (its serialized form) and the product's German label.
//! Formatting and colors stay with the caller; the classifier only hands out a
//! [`Severity`].

use crate::algorithms::{
    bmi, body_fat_pct, energy_balance, homa_ir, ldl_mgdl, metabolic_syndrome_count, tg_hdl_ratio,
};
use crate::physiological_constants::{
    body_composition as bc, cardiovascular as cv, energy, glycemic, lipids, metabolic_syndrome,
};
use crate::units::glucose_mgdl;
use physio_core::models::{Sex, StateRecord, UnitModes};
use serde::{Deserialize, Serialize};

/// Severity tag attached to every category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Favourable (green)
    Good,
    /// Worth watching (yellow)
    Caution,
    /// Unfavourable (red)
    Alert,
    /// Informational, no judgement (blue)
    Info,
}

/// Common view over the category enums
pub trait RiskCategory {
    /// Stable English code
    fn code(&self) -> &'static str;
    /// Display label as shown by the product
    fn label(&self) -> &'static str;
    /// Severity tag
    fn severity(&self) -> Severity;

    /// Flatten into a serializable badge
    fn badge(&self) -> Badge {
        Badge {
            code: self.code(),
            label: self.label(),
            severity: self.severity(),
        }
    }
}

/// Flattened category for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Stable English code
    pub code: &'static str,
    /// Display label
    pub label: &'static str,
    /// Severity tag
    pub severity: Severity,
}

macro_rules! risk_category {
    ($ty:ident { $($variant:ident => ($code:literal, $label:literal, $severity:ident)),+ $(,)? }) => {
        impl RiskCategory for $ty {
            fn code(&self) -> &'static str {
                match self { $(Self::$variant => $code,)+ }
            }

            fn label(&self) -> &'static str {
                match self { $(Self::$variant => $label,)+ }
            }

            fn severity(&self) -> Severity {
                match self { $(Self::$variant => Severity::$severity,)+ }
            }
        }
    };
}

/// BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 to below 25
    Normal,
    /// 25 to below 30
    Overweight,
    /// 30 and above
    Obese,
}

risk_category!(BmiCategory {
    Underweight => ("underweight", "Untergewicht", Caution),
    Normal => ("normal", "Normal", Good),
    Overweight => ("overweight", "Übergewicht", Caution),
    Obese => ("obese", "Adipositas", Alert),
});

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn classify(value: f64) -> Self {
        if value < bc::BMI_UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if value < bc::BMI_OVERWEIGHT_FROM {
            Self::Normal
        } else if value < bc::BMI_OBESE_FROM {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// Body fat band (sex specific)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    /// Below 10 % (male) / 18 % (female)
    Athletic,
    /// Up to 20 % / 28 %
    Good,
    /// Up to 25 % / 33 %
    Elevated,
    /// Above that
    High,
}

risk_category!(BodyFatCategory {
    Athletic => ("athletic", "athletisch", Good),
    Good => ("good", "gut", Good),
    Elevated => ("elevated", "erhöht", Caution),
    High => ("high", "hoch", Alert),
});

impl BodyFatCategory {
    /// Classify a body fat percentage for `sex`
    #[must_use]
    pub fn classify(percent: f64, sex: Sex) -> Self {
        let (athletic_below, good_up_to, elevated_up_to) = match sex {
            Sex::Male => (
                bc::MALE_ATHLETIC_BELOW,
                bc::MALE_GOOD_UP_TO,
                bc::MALE_ELEVATED_UP_TO,
            ),
            Sex::Female => (
                bc::FEMALE_ATHLETIC_BELOW,
                bc::FEMALE_GOOD_UP_TO,
                bc::FEMALE_ELEVATED_UP_TO,
            ),
        };
        if percent < athletic_below {
            Self::Athletic
        } else if percent <= good_up_to {
            Self::Good
        } else if percent <= elevated_up_to {
            Self::Elevated
        } else {
            Self::High
        }
    }
}

/// Fasting glucose band (mg/dL-normalized)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlucoseCategory {
    /// Below 100 mg/dL
    Normal,
    /// 100 to below 126 mg/dL
    Impaired,
    /// 126 mg/dL and above
    DiabetesThreshold,
}

risk_category!(GlucoseCategory {
    Normal => ("normal", "normal", Good),
    Impaired => ("impaired", "gestört", Caution),
    DiabetesThreshold => ("diabetes_threshold", "Diabetes‑Schwelle", Alert),
});

impl GlucoseCategory {
    /// Classify fasting glucose given in mg/dL
    #[must_use]
    pub fn classify(glucose_mgdl: f64) -> Self {
        if glucose_mgdl < glycemic::IMPAIRED_FASTING_FROM_MGDL {
            Self::Normal
        } else if glucose_mgdl < glycemic::DIABETES_FASTING_FROM_MGDL {
            Self::Impaired
        } else {
            Self::DiabetesThreshold
        }
    }
}

/// HOMA-IR band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomaCategory {
    /// Below 1
    Low,
    /// 1 to below 2
    Elevated,
    /// 2 and above
    SuspectedResistance,
}

risk_category!(HomaCategory {
    Low => ("low", "niedrig", Good),
    Elevated => ("elevated", "erhöht", Caution),
    SuspectedResistance => ("suspected_insulin_resistance", "Insulinresistenz‑Verdacht", Alert),
});

impl HomaCategory {
    /// Classify a HOMA-IR value
    #[must_use]
    pub fn classify(value: f64) -> Self {
        if value < glycemic::HOMA_ELEVATED_FROM {
            Self::Low
        } else if value < glycemic::HOMA_RESISTANCE_FROM {
            Self::Elevated
        } else {
            Self::SuspectedResistance
        }
    }
}

/// LDL band (mg/dL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LdlCategory {
    /// Below 100
    Optimal,
    /// 100 to below 130
    NearOptimal,
    /// 130 to below 160
    BorderlineHigh,
    /// 160 to below 190
    High,
    /// 190 and above
    VeryHigh,
    /// LDL undefined (triglycerides too high for Friedewald)
    NotApplicable,
}

risk_category!(LdlCategory {
    Optimal => ("optimal", "optimal", Good),
    NearOptimal => ("near_optimal", "nahe optimal", Good),
    BorderlineHigh => ("borderline_high", "grenzwertig hoch", Caution),
    High => ("high", "hoch", Alert),
    VeryHigh => ("very_high", "sehr hoch", Alert),
    NotApplicable => ("not_applicable", "n. anwendbar (TG hoch)", Info),
});

impl LdlCategory {
    /// Classify LDL in mg/dL; non-finite values are not applicable
    #[must_use]
    pub fn classify(ldl_mgdl: f64) -> Self {
        if !ldl_mgdl.is_finite() {
            Self::NotApplicable
        } else if ldl_mgdl < lipids::LDL_OPTIMAL_BELOW {
            Self::Optimal
        } else if ldl_mgdl < lipids::LDL_NEAR_OPTIMAL_BELOW {
            Self::NearOptimal
        } else if ldl_mgdl < lipids::LDL_BORDERLINE_BELOW {
            Self::BorderlineHigh
        } else if ldl_mgdl < lipids::LDL_HIGH_BELOW {
            Self::High
        } else {
            Self::VeryHigh
        }
    }
}

/// Triglyceride to HDL ratio band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TgHdlCategory {
    /// Below 2
    Favourable,
    /// 2 to below 3
    Watch,
    /// 3 and above
    Unfavourable,
}

risk_category!(TgHdlCategory {
    Favourable => ("favourable", "günstig", Good),
    Watch => ("watch", "beobachten", Caution),
    Unfavourable => ("unfavourable", "ungünstig", Alert),
});

impl TgHdlCategory {
    /// Classify a TG/HDL ratio
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        if ratio < lipids::TG_HDL_FAVOURABLE_BELOW {
            Self::Favourable
        } else if ratio < lipids::TG_HDL_WATCH_BELOW {
            Self::Watch
        } else {
            Self::Unfavourable
        }
    }
}

/// Energy balance band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyBalanceCategory {
    /// More than 100 kcal/day above expenditure
    Surplus,
    /// More than 100 kcal/day below expenditure
    Deficit,
    /// Within +/- 100 kcal/day
    Balanced,
}

risk_category!(EnergyBalanceCategory {
    Surplus => ("surplus", "Überschuss", Caution),
    Deficit => ("deficit", "Defizit", Caution),
    Balanced => ("balanced", "≈ ausgeglichen", Good),
});

impl EnergyBalanceCategory {
    /// Classify an energy balance in kcal/day
    #[must_use]
    pub fn classify(balance: f64) -> Self {
        if balance > energy::BALANCE_TOLERANCE_KCAL {
            Self::Surplus
        } else if balance < -energy::BALANCE_TOLERANCE_KCAL {
            Self::Deficit
        } else {
            Self::Balanced
        }
    }
}

/// Metabolic syndrome screening outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetabolicSyndromeCategory {
    /// Zero or one criterion
    NoFullPicture,
    /// Exactly two criteria
    Borderline,
    /// Three or more criteria
    Suspected,
}

risk_category!(MetabolicSyndromeCategory {
    NoFullPicture => ("no_full_picture", "kein Vollbild", Good),
    Borderline => ("borderline", "kein Vollbild", Caution),
    Suspected => ("suspected", "Verdacht", Alert),
});

impl MetabolicSyndromeCategory {
    /// Classify a criteria count
    #[must_use]
    pub const fn classify(count: u8) -> Self {
        if count >= metabolic_syndrome::SUSPECTED_FROM {
            Self::Suspected
        } else if count == metabolic_syndrome::SUSPECTED_FROM - 1 {
            Self::Borderline
        } else {
            Self::NoFullPicture
        }
    }
}

/// Blood pressure category on (systolic, diastolic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureCategory {
    /// Systolic below 120 and diastolic below 80
    Optimal,
    /// 120-129 or 80-84
    Normal,
    /// 130-139 or 85-89
    HighNormal,
    /// 140-159 or 90-99
    Grade1,
    /// 160-179 or 100-109
    Grade2,
    /// Systolic from 180 or diastolic from 110
    Grade3,
    /// No band matched (gaps between integer bands, non-finite readings)
    Unclear,
}

risk_category!(BloodPressureCategory {
    Optimal => ("optimal", "Optimal", Good),
    Normal => ("normal", "Normal", Good),
    HighNormal => ("high_normal", "Hoch‑normal", Caution),
    Grade1 => ("hypertension_grade_1", "Hypertonie Grad 1", Alert),
    Grade2 => ("hypertension_grade_2", "Hypertonie Grad 2", Alert),
    Grade3 => ("hypertension_grade_3", "Hypertonie Grad 3", Alert),
    Unclear => ("unclear", "Unklar", Caution),
});

impl BloodPressureCategory {
    /// Classify a reading
    ///
    /// Evaluation order matters: optimal is checked first, then the bands in
    /// ascending severity, where either reading alone selects a band. The
    /// first band that matches wins, so 125/95 is `Normal`.
    #[must_use]
    pub fn classify(systolic: f64, diastolic: f64) -> Self {
        let within = |value: f64, (low, high): (f64, f64)| value >= low && value <= high;

        if systolic < cv::OPTIMAL_SBP_BELOW && diastolic < cv::OPTIMAL_DBP_BELOW {
            Self::Optimal
        } else if within(systolic, cv::NORMAL_SBP) || within(diastolic, cv::NORMAL_DBP) {
            Self::Normal
        } else if within(systolic, cv::HIGH_NORMAL_SBP) || within(diastolic, cv::HIGH_NORMAL_DBP) {
            Self::HighNormal
        } else if within(systolic, cv::GRADE1_SBP) || within(diastolic, cv::GRADE1_DBP) {
            Self::Grade1
        } else if within(systolic, cv::GRADE2_SBP) || within(diastolic, cv::GRADE2_DBP) {
            Self::Grade2
        } else if systolic >= cv::GRADE3_SBP_FROM || diastolic >= cv::GRADE3_DBP_FROM {
            Self::Grade3
        } else {
            Self::Unclear
        }
    }
}

/// Every category of one state record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    /// BMI band
    pub bmi: BmiCategory,
    /// Body fat band
    pub body_fat: BodyFatCategory,
    /// Blood pressure category
    pub blood_pressure: BloodPressureCategory,
    /// Fasting glucose band
    pub glucose: GlucoseCategory,
    /// HOMA-IR band
    pub homa_ir: HomaCategory,
    /// LDL band
    pub ldl: LdlCategory,
    /// TG/HDL band
    pub tg_hdl: TgHdlCategory,
    /// Energy balance band
    pub energy_balance: EnergyBalanceCategory,
    /// Metabolic syndrome outcome
    pub metabolic_syndrome: MetabolicSyndromeCategory,
}

impl CategoryReport {
    /// Classify every metric of `record`
    #[must_use]
    pub fn evaluate(record: &StateRecord, units: UnitModes) -> Self {
        Self {
            bmi: BmiCategory::classify(bmi(record)),
            body_fat: BodyFatCategory::classify(body_fat_pct(record), record.sex),
            blood_pressure: BloodPressureCategory::classify(record.sbp, record.dbp),
            glucose: GlucoseCategory::classify(glucose_mgdl(record, units)),
            homa_ir: HomaCategory::classify(homa_ir(record, units)),
            ldl: LdlCategory::classify(ldl_mgdl(record, units)),
            tg_hdl: TgHdlCategory::classify(tg_hdl_ratio(record, units)),
            energy_balance: EnergyBalanceCategory::classify(energy_balance(record)),
            metabolic_syndrome: MetabolicSyndromeCategory::classify(metabolic_syndrome_count(
                record, units,
            )),
        }
    }

    /// `(name, badge)` pairs in presentation order
    #[must_use]
    pub fn badges(&self) -> Vec<(&'static str, Badge)> {
        vec![
            ("bmi", self.bmi.badge()),
            ("body_fat", self.body_fat.badge()),
            ("blood_pressure", self.blood_pressure.badge()),
            ("glucose", self.glucose.badge()),
            ("homa_ir", self.homa_ir.badge()),
            ("ldl", self.ldl.badge()),
            ("tg_hdl", self.tg_hdl.badge()),
            ("energy_balance", self.energy_balance.badge()),
            ("metabolic_syndrome", self.metabolic_syndrome.badge()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_boundaries_are_half_open() {
        assert_eq!(BmiCategory::classify(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::Normal.label(), "Normal");
    }

    #[test]
    fn test_body_fat_inclusive_upper_bounds() {
        assert_eq!(BodyFatCategory::classify(9.9, Sex::Male), BodyFatCategory::Athletic);
        assert_eq!(BodyFatCategory::classify(20.0, Sex::Male), BodyFatCategory::Good);
        assert_eq!(BodyFatCategory::classify(25.0, Sex::Male), BodyFatCategory::Elevated);
        assert_eq!(BodyFatCategory::classify(25.1, Sex::Male), BodyFatCategory::High);
        assert_eq!(BodyFatCategory::classify(20.0, Sex::Female), BodyFatCategory::Good);
        assert_eq!(BodyFatCategory::classify(33.0, Sex::Female), BodyFatCategory::Elevated);
    }

    #[test]
    fn test_blood_pressure_evaluation_order() {
        assert_eq!(
            BloodPressureCategory::classify(118.0, 76.0),
            BloodPressureCategory::Optimal
        );
        assert_eq!(
            BloodPressureCategory::classify(125.0, 95.0),
            BloodPressureCategory::Normal
        );
        assert_eq!(
            BloodPressureCategory::classify(135.0, 70.0),
            BloodPressureCategory::HighNormal
        );
        assert_eq!(
            BloodPressureCategory::classify(150.0, 70.0),
            BloodPressureCategory::Grade1
        );
        assert_eq!(
            BloodPressureCategory::classify(170.0, 105.0),
            BloodPressureCategory::Grade2
        );
        assert_eq!(
            BloodPressureCategory::classify(110.0, 115.0),
            BloodPressureCategory::Grade3
        );
        assert_eq!(
            BloodPressureCategory::classify(119.5, 79.5),
            BloodPressureCategory::Optimal
        );
        assert_eq!(
            BloodPressureCategory::classify(129.5, 70.0),
            BloodPressureCategory::Unclear
        );
        assert_eq!(
            BloodPressureCategory::classify(f64::NAN, f64::NAN),
            BloodPressureCategory::Unclear
        );
    }

    #[test]
    fn test_ldl_not_applicable_is_info() {
        let category = LdlCategory::classify(f64::NAN);
        assert_eq!(category, LdlCategory::NotApplicable);
        assert_eq!(category.severity(), Severity::Info);
        assert_eq!(LdlCategory::classify(129.9), LdlCategory::NearOptimal);
        assert_eq!(LdlCategory::classify(190.0), LdlCategory::VeryHigh);
    }

    #[test]
    fn test_homa_of_default_profile_is_elevated() {
        let report = CategoryReport::evaluate(&StateRecord::default(), UnitModes::default());
        assert_eq!(report.homa_ir, HomaCategory::Elevated);
        assert_eq!(report.homa_ir.label(), "erhöht");
        assert_eq!(report.bmi, BmiCategory::Normal);
    }

    #[test]
    fn test_energy_balance_tolerance() {
        assert_eq!(EnergyBalanceCategory::classify(100.0), EnergyBalanceCategory::Balanced);
        assert_eq!(EnergyBalanceCategory::classify(100.1), EnergyBalanceCategory::Surplus);
        assert_eq!(EnergyBalanceCategory::classify(-100.1), EnergyBalanceCategory::Deficit);
    }

    #[test]
    fn test_metabolic_syndrome_outcomes() {
        assert_eq!(
            MetabolicSyndromeCategory::classify(1).severity(),
            Severity::Good
        );
        assert_eq!(
            MetabolicSyndromeCategory::classify(2).severity(),
            Severity::Caution
        );
        assert_eq!(
            MetabolicSyndromeCategory::classify(5),
            MetabolicSyndromeCategory::Suspected
        );
    }

    #[test]
    fn test_badge_serializes_code_and_severity() {
        let json = serde_json::to_value(GlucoseCategory::Impaired.badge()).unwrap();
        assert_eq!(json["code"], "impaired");
        assert_eq!(json["severity"], "caution");
    }
}
