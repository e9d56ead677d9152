// ABOUTME: Literature constants and clinical thresholds used by the derivation engine
// ABOUTME: Groups formula coefficients and category boundaries by physiological domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on published formulas and guidelines
//!
//! Category boundaries are half-open on the lower bound: a value equal to a
//! threshold belongs to the band above it.

/// Body mass index and body fat estimation
///
/// References:
/// - WHO (2000). Obesity: preventing and managing the global epidemic. Technical Report Series 894
/// - Deurenberg, P., Weststrate, J.A., & Seidell, J.C. (1991). Body mass index as a measure of body fatness.
///   *British Journal of Nutrition*, 65(2), 105-114.
pub mod body_composition {
    /// BMI below this is underweight
    pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
    /// BMI at or above this is overweight
    pub const BMI_OVERWEIGHT_FROM: f64 = 25.0;
    /// BMI at or above this is obese
    pub const BMI_OBESE_FROM: f64 = 30.0;

    /// Deurenberg BMI coefficient
    pub const DEURENBERG_BMI_COEF: f64 = 1.2;
    /// Deurenberg age coefficient
    pub const DEURENBERG_AGE_COEF: f64 = 0.23;
    /// Deurenberg sex coefficient (applied for males)
    pub const DEURENBERG_SEX_COEF: f64 = 10.8;
    /// Deurenberg constant term
    pub const DEURENBERG_CONSTANT: f64 = 5.4;

    /// Lower clamp of the body fat estimate (%)
    pub const BODY_FAT_MIN_PERCENT: f64 = 3.0;
    /// Upper clamp of the body fat estimate (%)
    pub const BODY_FAT_MAX_PERCENT: f64 = 60.0;

    /// Male body fat below this is athletic (%)
    pub const MALE_ATHLETIC_BELOW: f64 = 10.0;
    /// Male body fat up to and including this is good (%)
    pub const MALE_GOOD_UP_TO: f64 = 20.0;
    /// Male body fat up to and including this is elevated (%)
    pub const MALE_ELEVATED_UP_TO: f64 = 25.0;
    /// Female body fat below this is athletic (%)
    pub const FEMALE_ATHLETIC_BELOW: f64 = 18.0;
    /// Female body fat up to and including this is good (%)
    pub const FEMALE_GOOD_UP_TO: f64 = 28.0;
    /// Female body fat up to and including this is elevated (%)
    pub const FEMALE_ELEVATED_UP_TO: f64 = 33.0;
}

/// Resting metabolic rate and energy expenditure
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// *American Journal of Clinical Nutrition*, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
pub mod energy {
    /// Mifflin-St Jeor weight coefficient (kcal per kg)
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// Mifflin-St Jeor height coefficient (kcal per cm)
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// Mifflin-St Jeor age coefficient (kcal per year)
    pub const MSJ_AGE_COEF: f64 = -5.0;
    /// Mifflin-St Jeor male constant
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;
    /// Mifflin-St Jeor female constant
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

    /// Expenditure per extra daily step (kcal)
    pub const KCAL_PER_STEP: f64 = 0.045;
    /// Expenditure per strength session (kcal), spread over the week
    pub const KCAL_PER_STRENGTH_SESSION: f64 = 50.0;

    /// Balance within +/- this band counts as balanced (kcal/day)
    pub const BALANCE_TOLERANCE_KCAL: f64 = 100.0;
}

/// Heart rate, aerobic capacity and blood pressure
///
/// References:
/// - Tanaka, H. et al. (2001). "Age-predicted maximal heart rate revisited." *J Am Coll Cardiol*, 37(1), 153-156.
/// - Uth, N. et al. (2004). "Estimation of VO2max from the ratio between HRmax and HRrest." *Eur J Appl Physiol*, 91, 111-115.
/// - Williams, B. et al. (2018). ESC/ESH Guidelines for the management of arterial hypertension.
pub mod cardiovascular {
    /// Tanaka intercept (bpm)
    pub const TANAKA_INTERCEPT: f64 = 208.0;
    /// Tanaka age slope (bpm per year)
    pub const TANAKA_AGE_SLOPE: f64 = 0.7;
    /// Uth-Sørensen factor (ml/kg/min)
    pub const UTH_SORENSEN_FACTOR: f64 = 15.3;

    /// Optimal: systolic below this (and diastolic below `OPTIMAL_DBP_BELOW`)
    pub const OPTIMAL_SBP_BELOW: f64 = 120.0;
    /// Optimal: diastolic below this
    pub const OPTIMAL_DBP_BELOW: f64 = 80.0;
    /// Normal systolic band (inclusive)
    pub const NORMAL_SBP: (f64, f64) = (120.0, 129.0);
    /// Normal diastolic band (inclusive)
    pub const NORMAL_DBP: (f64, f64) = (80.0, 84.0);
    /// High-normal systolic band (inclusive)
    pub const HIGH_NORMAL_SBP: (f64, f64) = (130.0, 139.0);
    /// High-normal diastolic band (inclusive)
    pub const HIGH_NORMAL_DBP: (f64, f64) = (85.0, 89.0);
    /// Grade 1 systolic band (inclusive)
    pub const GRADE1_SBP: (f64, f64) = (140.0, 159.0);
    /// Grade 1 diastolic band (inclusive)
    pub const GRADE1_DBP: (f64, f64) = (90.0, 99.0);
    /// Grade 2 systolic band (inclusive)
    pub const GRADE2_SBP: (f64, f64) = (160.0, 179.0);
    /// Grade 2 diastolic band (inclusive)
    pub const GRADE2_DBP: (f64, f64) = (100.0, 109.0);
    /// Grade 3 when systolic reaches this
    pub const GRADE3_SBP_FROM: f64 = 180.0;
    /// Grade 3 when diastolic reaches this
    pub const GRADE3_DBP_FROM: f64 = 110.0;
}

/// Glucose metabolism
///
/// References:
/// - Matthews, D.R. et al. (1985). Homeostasis model assessment. *Diabetologia*, 28(7), 412-419.
/// - Nathan, D.M. et al. (2008). Translating the A1C assay into estimated average glucose values.
///   *Diabetes Care*, 31(8), 1473-1478.
pub mod glycemic {
    /// HOMA-IR divisor for glucose in mg/dL and insulin in µU/mL
    pub const HOMA_IR_DIVISOR: f64 = 405.0;
    /// eAG slope (mg/dL per % `HbA1c`)
    pub const EAG_SLOPE: f64 = 28.7;
    /// eAG intercept (mg/dL)
    pub const EAG_INTERCEPT: f64 = 46.7;

    /// Fasting glucose at or above this is impaired (mg/dL)
    pub const IMPAIRED_FASTING_FROM_MGDL: f64 = 100.0;
    /// Fasting glucose at or above this reaches the diabetes threshold (mg/dL)
    pub const DIABETES_FASTING_FROM_MGDL: f64 = 126.0;

    /// HOMA-IR at or above this is elevated
    pub const HOMA_ELEVATED_FROM: f64 = 1.0;
    /// HOMA-IR at or above this suggests insulin resistance
    pub const HOMA_RESISTANCE_FROM: f64 = 2.0;
}

/// Lipid profile
///
/// Reference: Friedewald, W.T. et al. (1972). Estimation of the concentration of low-density
/// lipoprotein cholesterol in plasma. *Clinical Chemistry*, 18(6), 499-502.
pub mod lipids {
    /// Triglyceride divisor in the Friedewald equation (mg/dL)
    pub const FRIEDEWALD_TG_DIVISOR: f64 = 5.0;
    /// Friedewald is undefined above this triglyceride level (mg/dL)
    pub const FRIEDEWALD_MAX_TG_MGDL: f64 = 400.0;

    /// LDL below this is optimal (mg/dL)
    pub const LDL_OPTIMAL_BELOW: f64 = 100.0;
    /// LDL below this is near optimal (mg/dL)
    pub const LDL_NEAR_OPTIMAL_BELOW: f64 = 130.0;
    /// LDL below this is borderline high (mg/dL)
    pub const LDL_BORDERLINE_BELOW: f64 = 160.0;
    /// LDL below this is high (mg/dL)
    pub const LDL_HIGH_BELOW: f64 = 190.0;

    /// TG/HDL below this is favourable
    pub const TG_HDL_FAVOURABLE_BELOW: f64 = 2.0;
    /// TG/HDL below this warrants watching
    pub const TG_HDL_WATCH_BELOW: f64 = 3.0;
}

/// Metabolic syndrome screening criteria (IDF 2006 waist cut-offs)
pub mod metabolic_syndrome {
    /// Male waist criterion (cm)
    pub const MALE_WAIST_FROM_CM: f64 = 94.0;
    /// Female waist criterion (cm)
    pub const FEMALE_WAIST_FROM_CM: f64 = 80.0;
    /// Triglyceride criterion (mg/dL)
    pub const TG_FROM_MGDL: f64 = 150.0;
    /// Male HDL criterion (mg/dL)
    pub const MALE_HDL_BELOW_MGDL: f64 = 40.0;
    /// Female HDL criterion (mg/dL)
    pub const FEMALE_HDL_BELOW_MGDL: f64 = 50.0;
    /// Systolic criterion (mmHg)
    pub const SBP_FROM: f64 = 130.0;
    /// Diastolic criterion (mmHg)
    pub const DBP_FROM: f64 = 85.0;
    /// Fasting glucose criterion (mg/dL)
    pub const GLUCOSE_FROM_MGDL: f64 = 100.0;
    /// Number of criteria screened
    pub const CRITERIA_COUNT: u8 = 5;
    /// Criteria count from which the syndrome is suspected
    pub const SUSPECTED_FROM: u8 = 3;
}

/// Weight projection horizon
pub mod projection {
    /// Horizon used when the record carries zero weeks
    pub const DEFAULT_HORIZON_WEEKS: u32 = 12;
    /// Shortest projection (weeks)
    pub const MIN_HORIZON_WEEKS: u32 = 1;
    /// Longest projection (weeks)
    pub const MAX_HORIZON_WEEKS: u32 = 52;
}
